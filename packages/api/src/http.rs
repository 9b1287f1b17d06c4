//! # HTTP transport
//!
//! [`HttpTransport`] is the [`Transport`] used by the running application. It is
//! a thin wrapper around a shared [`reqwest::Client`]: in a wasm build reqwest
//! goes through the browser's `fetch`, natively it uses its own connector.
//!
//! ## URL resolution
//!
//! Handlers pass relative URLs (`/users`, `/user/42`) exactly as they appear in
//! the page. They are resolved against, in order:
//!
//! 1. the configured `base_url`, when not empty;
//! 2. the page's `window.location.origin` (wasm only);
//! 3. [`DEV_ORIGIN`], the backend's development address.
//!
//! ## Credentials
//!
//! Browser requests are sent with `credentials: same-origin`, so the session
//! cookie of the page travels with every call.

use reqwest::{header, Client, Url};
use serde_json::Value;

use crate::error::RequestError;
use crate::request::{
    ApiRequest, Transport, CONTENT_TYPE_JSON, REQUESTED_WITH_AJAX, REQUESTED_WITH_HEADER,
};

/// Fallback origin for native builds with no `base_url`.
pub const DEV_ORIGIN: &str = "http://127.0.0.1:8000";

/// `reqwest`-backed transport. Cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// A transport resolving relative URLs against `base_url` (empty = page origin).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim().to_string(),
        }
    }

    /// Resolve `url` to an absolute address.
    pub fn resolve(&self, url: &str) -> Result<Url, RequestError> {
        let invalid = |reason: String| RequestError::InvalidUrl {
            url: url.to_string(),
            reason,
        };

        if let Ok(absolute) = Url::parse(url) {
            return Ok(absolute);
        }

        let origin = if self.base_url.is_empty() {
            page_origin().unwrap_or_else(|| DEV_ORIGIN.to_string())
        } else {
            self.base_url.clone()
        };

        Url::parse(&origin)
            .and_then(|base| base.join(url))
            .map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, RequestError> {
        let url = self.resolve(&request.url)?;

        let mut builder = self
            .client
            .request(request.verb.into(), url)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_AJAX);

        if request.verb.carries_body() {
            let body = serde_json::to_vec(&request.body).map_err(RequestError::Encode)?;
            builder = builder.body(body);
        }

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_same_origin();
        }

        let response = builder.send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(RequestError::Decode)
    }
}
