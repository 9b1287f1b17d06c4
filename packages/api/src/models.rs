//! # Wire models for the users endpoint
//!
//! The server is the only source of truth for a user; the client never builds a
//! [`UserRecord`] itself, it only decodes what the server sends back.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`RecordId`] | A user id. Accepted as a JSON string (`"42"`) or integer (`42`), always rendered as text. |
//! | [`UserRecord`] | `{ id, first_name, last_name }` as returned by `POST /users` and inside `GET /users`. Unknown fields are ignored. |
//! | [`UserList`] | The `{ "users": [...] }` envelope of `GET /users`. |
//! | [`FormPayload`] | The flattened form fields sent as the body of a create request. |
//! | [`ActionStatus`] | The `{ "success": ... }` envelope of `PUT` / `DELETE`, read with JavaScript truthiness. |

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned identifier of a user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Integer(i64),
}

impl From<WireId> for RecordId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => RecordId(s),
            WireId::Integer(n) => RecordId(n.to_string()),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user as last reported by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
}

/// Response of `GET /users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// Form fields flattened into a key/value map, in field-name order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}

/// Outcome envelope of an update or delete.
///
/// Built from any JSON value so that a malformed response reads as "not
/// successful" instead of failing to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionStatus {
    success: bool,
}

impl ActionStatus {
    pub fn from_value(value: &Value) -> Self {
        let success = value.get("success").is_some_and(is_truthy);
        Self { success }
    }

    pub fn succeeded(&self) -> bool {
        self.success
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
