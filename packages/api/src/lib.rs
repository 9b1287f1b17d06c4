//! # API crate — REST plumbing for Userboard
//!
//! Everything the UI needs to talk to the users endpoint lives here: the record
//! types that cross the wire, the client configuration, and the request helper
//! every handler goes through.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | — | `userboard.toml` client configuration (form target, table URLs, base URL) |
//! | [`error`] | — | [`RequestError`], the failure taxonomy of a single request |
//! | [`models`] | — | [`UserRecord`], [`UserList`], [`FormPayload`], [`ActionStatus`] |
//! | [`request`] | — | [`ApiRequest`], [`Verb`], the [`Transport`] seam and the request helpers |
//! | [`http`] | — | [`HttpTransport`], the `reqwest` implementation of [`Transport`] |
//! | `memory` | `testing` | `MemoryTransport`, a scripted transport for tests |
//!
//! ## Request helpers
//!
//! - [`try_request`] returns `Result<T, RequestError>` for callers that want the
//!   failure.
//! - [`server_request`] is fire-and-forget: failures are logged through `tracing`
//!   and come back as `None`, so the only success signal is `Some`.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod request;

#[cfg(any(test, feature = "testing"))]
mod memory;
#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryTransport;

pub use config::{ClientConfig, FormSettings, TableSettings};
pub use error::RequestError;
pub use http::HttpTransport;
pub use models::{ActionStatus, FormPayload, RecordId, UserList, UserRecord};
pub use request::{server_request, try_request, ApiRequest, Transport, Verb};
