//! Oceanview HTTP client
//!
//! A thin wrapper over `reqwest` for the reservation backend's REST API. Every
//! call goes to `{origin}/api{path}`, carries the session's bearer token when one
//! is stored, and comes back as parsed JSON, raw text, or a [`ClientError`].

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::response::ResponseBody;
pub use client::{ApiClient, ApiClientBuilder};
