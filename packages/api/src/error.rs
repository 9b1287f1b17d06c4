//! Failure modes of a single request.

use thiserror::Error;

/// Why a request produced no usable value.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The URL could not be resolved to an absolute address.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never completed (connection refused, CORS, aborted fetch...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body was not the JSON we expected.
    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The payload could not be turned into JSON.
    #[error("could not encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// A form `method` attribute that is not an HTTP verb we issue.
    #[error("unsupported HTTP method `{0}`")]
    UnsupportedVerb(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RequestError::Status {
                status: status.as_u16(),
            },
            None => RequestError::Transport(err.to_string()),
        }
    }
}
