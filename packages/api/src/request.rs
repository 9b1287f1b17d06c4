//! # Request helper
//!
//! Every call to the backend goes through [`server_request`] (or
//! [`try_request`] when the caller wants the error). A request always carries
//! the JSON and AJAX headers below and a JSON body, which defaults to `{}`.
//!
//! The network itself sits behind the [`Transport`] trait so handlers can be
//! driven by [`crate::HttpTransport`] in the browser and by a scripted
//! transport in tests.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RequestError;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_AJAX: &str = "XMLHttpRequest";

/// HTTP verbs the client issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    /// Whether the JSON body is sent. Browsers refuse a body on `GET`.
    pub fn carries_body(&self) -> bool {
        !matches!(self, Verb::Get)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(RequestError::UnsupportedVerb(s.to_string())),
        }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single call to the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub verb: Verb,
    pub url: String,
    pub body: Value,
}

impl ApiRequest {
    /// A request with an empty JSON object as its body.
    pub fn new(verb: Verb, url: impl Into<String>) -> Self {
        Self {
            verb,
            url: url.into(),
            body: Value::Object(Map::new()),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Verb::Get, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Verb::Delete, url)
    }

    /// Replace the body with the JSON encoding of `payload`.
    pub fn with_payload<T: Serialize>(mut self, payload: &T) -> Result<Self, RequestError> {
        self.body = serde_json::to_value(payload).map_err(RequestError::Encode)?;
        Ok(self)
    }
}

/// Sends an [`ApiRequest`] and yields the parsed JSON response.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<Value, RequestError>>;
}

/// Send `request` and decode the response as `T`.
pub async fn try_request<T, R>(transport: &R, request: ApiRequest) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    R: Transport,
{
    let value = transport.send(request).await?;
    serde_json::from_value(value).map_err(RequestError::Decode)
}

/// Fire-and-forget variant of [`try_request`].
///
/// Failures are logged and come back as `None`; there is no retry and no
/// separate error path.
pub async fn server_request<T, R>(transport: &R, request: ApiRequest) -> Option<T>
where
    T: DeserializeOwned,
    R: Transport,
{
    let verb = request.verb;
    let url = request.url.clone();
    match try_request(transport, request).await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("{verb} {url} failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;
    use crate::models::{FormPayload, UserRecord};
    use serde_json::json;

    #[test]
    fn test_verb_parsing_is_case_insensitive() {
        assert_eq!("post".parse::<Verb>().unwrap(), Verb::Post);
        assert_eq!(" Delete ".parse::<Verb>().unwrap(), Verb::Delete);
        assert!(matches!(
            "dialog".parse::<Verb>(),
            Err(RequestError::UnsupportedVerb(m)) if m == "dialog"
        ));
    }

    #[test]
    fn test_default_body_is_empty_object() {
        let request = ApiRequest::delete("/users/42");
        assert_eq!(request.verb, Verb::Delete);
        assert_eq!(request.body, json!({}));
    }

    #[test]
    fn test_with_payload_encodes_form() {
        let payload: FormPayload = [("first_name", "Tom")].into_iter().collect();
        let request = ApiRequest::new(Verb::Post, "/users")
            .with_payload(&payload)
            .unwrap();
        assert_eq!(request.body, json!({"first_name": "Tom"}));
    }

    #[tokio::test]
    async fn test_server_request_delivers_parsed_value() {
        let transport = MemoryTransport::new();
        transport.respond_with(json!({"id": 1, "first_name": "A", "last_name": "B"}));

        let record: Option<UserRecord> =
            server_request(&transport, ApiRequest::get("/users/1")).await;

        assert_eq!(record.unwrap().first_name, "A");
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_server_request_is_silent_on_failure() {
        let transport = MemoryTransport::new();
        transport.fail_with(RequestError::Transport("connection refused".into()));

        let record: Option<UserRecord> =
            server_request(&transport, ApiRequest::get("/users/1")).await;

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_try_request_reports_decode_errors() {
        let transport = MemoryTransport::new();
        transport.respond_with(json!({"unexpected": true}));

        let result: Result<UserRecord, _> =
            try_request(&transport, ApiRequest::get("/users/1")).await;

        assert!(matches!(result, Err(RequestError::Decode(_))));
    }
}
