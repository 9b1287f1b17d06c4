//! # Client configuration — `userboard.toml`
//!
//! Describes where the form posts to and which URLs the table uses, so that the
//! handlers receive these values explicitly instead of reading them back out of
//! the document.
//!
//! ## Structure
//!
//! ```toml
//! base_url = ""              # empty = same origin as the page
//!
//! [form]
//! action = "/users"          # create target
//! method = "post"
//!
//! [table]
//! collection_url = "/users"  # initial load
//! record_prefix = "/user"    # row links become <prefix>/<id>
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! configuration above.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::models::RecordId;
use crate::request::Verb;

/// Top-level configuration stored in `userboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin that relative URLs are resolved against. Empty means the page's origin.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub form: FormSettings,
    #[serde(default)]
    pub table: TableSettings,
}

/// The `action` and `method` attributes of the new-user form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default = "default_collection_url")]
    pub action: String,
    #[serde(default = "default_form_method")]
    pub method: String,
}

/// URLs used by the user table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Fetched once on mount to fill the table.
    #[serde(default = "default_collection_url")]
    pub collection_url: String,
    /// Prefix of the per-row resource URL that both action links point to.
    #[serde(default = "default_record_prefix")]
    pub record_prefix: String,
}

fn default_collection_url() -> String {
    "/users".to_string()
}

fn default_form_method() -> String {
    "post".to_string()
}

fn default_record_prefix() -> String {
    "/user".to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            action: default_collection_url(),
            method: default_form_method(),
        }
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            collection_url: default_collection_url(),
            record_prefix: default_record_prefix(),
        }
    }
}

impl FormSettings {
    /// The form's `method` as a verb.
    pub fn verb(&self) -> Result<Verb, RequestError> {
        self.method.parse()
    }
}

impl TableSettings {
    /// `<record_prefix>/<id>`, the resource URL behind a row's action links.
    pub fn record_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.record_prefix.trim_end_matches('/'), id)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "userboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.form.action, "/users");
        assert_eq!(config.form.verb().unwrap(), Verb::Post);
        assert_eq!(config.table.record_prefix, "/user");
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            base_url = "http://localhost:8000"

            [table]
            record_prefix = "/users/"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.table.collection_url, "/users");
        assert_eq!(config.table.record_url(&RecordId::new("9")), "/users/9");
    }

    #[test]
    fn test_toml_round_trip_keeps_overrides() {
        let mut config = ClientConfig::default();
        config.form.method = "PUT".to_string();

        let parsed = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.form.verb().unwrap(), Verb::Put);
    }
}
