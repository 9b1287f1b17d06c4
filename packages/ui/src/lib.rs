//! This crate contains the user board UI: table state, event handlers and the
//! components that render them.

pub mod handlers;
pub use handlers::{RowAction, RowActionOutcome, NOT_IMPLEMENTED};

mod table;
pub use table::{RowKey, TableHandle, UserRow, UserTableState};

mod alert;
pub use alert::alert;

mod board;
pub use board::UserBoard;

mod new_user_form;
pub use new_user_form::{flatten_form_fields, NewUserForm};

mod user_table;
pub use user_table::{RowActionEvent, UserRowView, UserTable};
