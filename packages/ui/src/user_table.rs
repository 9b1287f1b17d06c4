use dioxus::prelude::*;

use crate::handlers::RowAction;
use crate::table::{RowKey, UserRow};

/// A click on one of a row's action links.
#[derive(Clone, Debug, PartialEq)]
pub struct RowActionEvent {
    pub key: RowKey,
    pub action: RowAction,
    pub href: String,
}

/// The `.table` of users. Only the action links react to clicks.
#[component]
pub fn UserTable(rows: Vec<UserRow>, on_action: EventHandler<RowActionEvent>) -> Element {
    rsx! {
        div {
            class: "table",
            div {
                class: "table-header",
                span { "ID" }
                span { "First name" }
                span { "Last name" }
                span {}
                span {}
            }
            for row in rows {
                UserRowView {
                    key: "{row.key}",
                    row: row.clone(),
                    on_action: on_action,
                }
            }
        }
    }
}

/// One `.row`: id, first name, last name, then one span per action link.
#[component]
pub fn UserRowView(row: UserRow, on_action: EventHandler<RowActionEvent>) -> Element {
    rsx! {
        div {
            class: "row",
            span { class: "cell id", "{row.record.id}" }
            span { class: "cell first-name", "{row.record.first_name}" }
            span { class: "cell last-name", "{row.record.last_name}" }
            span {
                class: "cell action",
                RowActionLink {
                    row_key: row.key,
                    href: row.href.clone(),
                    action: RowAction::Update,
                    on_action: on_action,
                }
            }
            span {
                class: "cell action",
                RowActionLink {
                    row_key: row.key,
                    href: row.href.clone(),
                    action: RowAction::Delete,
                    on_action: on_action,
                }
            }
        }
    }
}

#[component]
fn RowActionLink(
    row_key: RowKey,
    href: String,
    action: RowAction,
    on_action: EventHandler<RowActionEvent>,
) -> Element {
    let target = href.clone();
    let label = action.label();

    rsx! {
        a {
            href: "{href}",
            "data-action": action.as_str(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_action.call(RowActionEvent {
                    key: row_key,
                    action,
                    href: target.clone(),
                });
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::UserTableState;
    use api::{RecordId, TableSettings, UserRecord};
    use dioxus::dioxus_core::{AttributeValue, Mutation, VirtualDom};

    fn sample_row() -> UserRow {
        let mut table = UserTableState::new();
        let record = UserRecord {
            id: RecordId::new("7"),
            first_name: "Tom".to_string(),
            last_name: "Jones".to_string(),
        };
        let key = table.append(record, &TableSettings::default());
        table.get(key).cloned().unwrap()
    }

    fn single_row() -> Element {
        rsx! {
            UserRowView {
                row: sample_row(),
                on_action: move |_: RowActionEvent| {},
            }
        }
    }

    #[test]
    fn test_only_action_links_listen_for_clicks() {
        let mut dom = VirtualDom::new(single_row);
        let edits = dom.rebuild_to_vec().edits;

        let listeners: Vec<&str> = edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(listeners, ["click", "click"]);

        let actions: Vec<&str> = edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::SetAttribute {
                    name: "data-action",
                    value: AttributeValue::Text(value),
                    ..
                } => Some(value.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(actions, ["update", "delete"]);
    }
}
