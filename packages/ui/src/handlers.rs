//! # Event handlers
//!
//! The three things the page does, written as plain async functions over any
//! [`Transport`] and any [`TableHandle`]. Components spawn them; tests drive
//! them with `api::MemoryTransport` and a bare [`UserTableState`].
//!
//! | Handler | Request | On success |
//! |---------|---------|-----------|
//! | [`load_users`] | `GET <collection_url>` | table replaced with the returned users |
//! | [`submit_new_user`] | `<form method> <form action>` with the form fields | one row appended |
//! | [`run_row_action`] | `DELETE <row href>` for delete, nothing for update | row removed when `success` is truthy |
//!
//! All of them go through [`server_request`]: a failed request has already been
//! logged by the time the handler sees `None`, and leaves the table untouched.
//!
//! [`UserTableState`]: crate::UserTableState

use api::{
    server_request, ActionStatus, ApiRequest, FormPayload, FormSettings, TableSettings,
    Transport, UserList, UserRecord,
};
use serde_json::Value;

use crate::table::{RowKey, TableHandle};

/// Message shown when the update action is clicked.
pub const NOT_IMPLEMENTED: &str = "Not implemented yet!";

/// Action carried by a row link's `data-action` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Update,
    Delete,
}

impl RowAction {
    /// Value of the `data-action` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Update => "update",
            RowAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Update => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

/// What a row action did to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowActionOutcome {
    /// Update is not supported; no request was sent.
    Unsupported,
    /// The server confirmed the delete and the row is gone.
    Removed,
    /// The server answered but did not report success.
    Kept,
    /// The request failed; see the log.
    Failed,
}

impl RowActionOutcome {
    /// Message to show the user in a blocking alert, if any. Every other
    /// outcome is silent on the page and only reaches the log.
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            RowActionOutcome::Unsupported => Some(NOT_IMPLEMENTED),
            RowActionOutcome::Removed | RowActionOutcome::Kept | RowActionOutcome::Failed => None,
        }
    }
}

/// Fill the table from the collection endpoint. Returns the number of rows loaded.
pub async fn load_users<R, H>(
    transport: &R,
    settings: &TableSettings,
    table: &mut H,
) -> Option<usize>
where
    R: Transport,
    H: TableHandle,
{
    let list: UserList =
        server_request(transport, ApiRequest::get(settings.collection_url.as_str())).await?;
    let count = list.users.len();
    table.with_table(|t| t.replace_all(list.users, settings));
    tracing::debug!("Loaded {count} users from {}", settings.collection_url);
    Some(count)
}

/// Submit the new-user form and append the created user.
pub async fn submit_new_user<R, H>(
    transport: &R,
    form: &FormSettings,
    settings: &TableSettings,
    payload: FormPayload,
    table: &mut H,
) -> Option<RowKey>
where
    R: Transport,
    H: TableHandle,
{
    let request = form
        .verb()
        .map(|verb| ApiRequest::new(verb, form.action.as_str()))
        .and_then(|request| request.with_payload(&payload));
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Cannot submit form to {}: {e}", form.action);
            return None;
        }
    };

    let record: UserRecord = server_request(transport, request).await?;
    Some(table.with_table(|t| t.append(record, settings)))
}

/// Run `action` for the row `key`, whose links point at `href`.
pub async fn run_row_action<R, H>(
    transport: &R,
    action: RowAction,
    key: RowKey,
    href: &str,
    table: &mut H,
) -> RowActionOutcome
where
    R: Transport,
    H: TableHandle,
{
    match action {
        RowAction::Update => {
            tracing::warn!("Update requested for {href}: {NOT_IMPLEMENTED}");
            RowActionOutcome::Unsupported
        }
        RowAction::Delete => {
            let Some(response) =
                server_request::<Value, _>(transport, ApiRequest::delete(href)).await
            else {
                return RowActionOutcome::Failed;
            };
            if ActionStatus::from_value(&response).succeeded() {
                table.with_table(|t| t.remove(key));
                RowActionOutcome::Removed
            } else {
                tracing::debug!("Delete of {href} not confirmed by the server");
                RowActionOutcome::Kept
            }
        }
    }
}
