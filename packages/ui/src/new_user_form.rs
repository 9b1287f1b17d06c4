use api::{FormPayload, FormSettings};
use dioxus::html::FormValue;
use dioxus::prelude::*;

/// Flatten the submitted form fields into a payload keyed by input name.
/// File inputs have no text value and are skipped.
pub fn flatten_form_fields(values: Vec<(String, FormValue)>) -> FormPayload {
    values
        .into_iter()
        .filter_map(|(name, value)| match value {
            FormValue::Text(text) => Some((name, text)),
            FormValue::File(_) => None,
        })
        .collect()
}

/// The new-user form. Native submission is suppressed; every named field is
/// handed to `on_submit` as a flat payload instead.
#[component]
pub fn NewUserForm(settings: FormSettings, on_submit: EventHandler<FormPayload>) -> Element {
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(flatten_form_fields(evt.values()));
    };

    rsx! {
        form {
            class: "new-user-form",
            action: "{settings.action}",
            method: "{settings.method}",
            onsubmit: handle_submit,

            label {
                r#for: "new-user-first-name",
                "First name"
            }
            input {
                id: "new-user-first-name",
                name: "first_name",
                r#type: "text",
            }

            label {
                r#for: "new-user-last-name",
                "Last name"
            }
            input {
                id: "new-user-last-name",
                name: "last_name",
                r#type: "text",
            }

            button { r#type: "submit", "Add user" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, value: &str) -> (String, FormValue) {
        (name.to_string(), FormValue::Text(value.to_string()))
    }

    #[test]
    fn test_every_named_text_field_is_submitted() {
        let payload = flatten_form_fields(vec![
            text("first_name", "Tom"),
            text("last_name", "Jones"),
            text("nickname", "TJ"),
        ]);

        assert_eq!(payload.len(), 3);
        assert_eq!(payload.get("first_name"), Some("Tom"));
        assert_eq!(payload.get("last_name"), Some("Jones"));
        assert_eq!(payload.get("nickname"), Some("TJ"));
    }

    #[test]
    fn test_file_fields_are_skipped() {
        let payload = flatten_form_fields(vec![
            text("first_name", "Ann"),
            ("avatar".to_string(), FormValue::File(None)),
        ]);

        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("avatar"), None);
    }

    #[test]
    fn test_empty_form_gives_empty_payload() {
        assert!(flatten_form_fields(Vec::new()).is_empty());
    }
}
