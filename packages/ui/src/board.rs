//! The user board: the new-user form above the user table.
//!
//! Reads the [`ClientConfig`] and [`HttpTransport`] provided by the app, owns
//! the table state, and spawns one handler task per event. Failures stay off
//! the page; the handlers report them through `tracing`.

use api::{ClientConfig, FormPayload, HttpTransport};
use dioxus::prelude::*;

use crate::alert::alert;
use crate::handlers::{load_users, run_row_action, submit_new_user};
use crate::new_user_form::NewUserForm;
use crate::table::UserTableState;
use crate::user_table::{RowActionEvent, UserTable};

const USER_BOARD_CSS: Asset = asset!("/assets/styling/user_board.css");

#[component]
pub fn UserBoard() -> Element {
    let config = use_context::<ClientConfig>();
    let transport = use_context::<HttpTransport>();
    let mut table = use_signal(UserTableState::new);

    let _loader = use_resource({
        let transport = transport.clone();
        let settings = config.table.clone();
        move || {
            let transport = transport.clone();
            let settings = settings.clone();
            async move {
                load_users(&transport, &settings, &mut table).await;
            }
        }
    });

    let on_submit = {
        let transport = transport.clone();
        let config = config.clone();
        move |payload: FormPayload| {
            let transport = transport.clone();
            let form = config.form.clone();
            let settings = config.table.clone();
            spawn(async move {
                submit_new_user(&transport, &form, &settings, payload, &mut table).await;
            });
        }
    };

    let on_action = move |event: RowActionEvent| {
        let transport = transport.clone();
        spawn(async move {
            let outcome =
                run_row_action(&transport, event.action, event.key, &event.href, &mut table).await;
            if let Some(message) = outcome.alert_message() {
                alert(message);
            }
        });
    };

    rsx! {
        document::Stylesheet { href: USER_BOARD_CSS }

        section {
            class: "user-board",
            NewUserForm {
                settings: config.form.clone(),
                on_submit: on_submit,
            }
            UserTable {
                rows: table.read().rows().to_vec(),
                on_action: on_action,
            }
        }
    }
}
