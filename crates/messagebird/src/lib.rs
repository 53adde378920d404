//! # MessageBird request dispatcher
//!
//! The HTTP layer an SDK sits on to call the MessageBird REST API:
//! - Static `AccessKey` authentication on every request
//! - `GET` params in the query string, JSON bodies for every other verb
//! - A fixed allow-list of status codes handed back to the caller
//! - Response bodies as text or raw bytes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use messagebird::{ClientConfig, RequestDispatcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = RequestDispatcher::from_config(ClientConfig::with_access_key("live_..."))?;
//!
//!     // 404 and 422 come back as bodies too; inspect the JSON to tell them apart.
//!     let balance = dispatcher.get("balance").await?;
//!     println!("{}", balance);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{ALLOWED_STATUS_CODES, RequestDispatcher, is_allowed_status};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use format::{ResponseBody, ResponseFormat};
pub use method::HttpMethod;
pub use params::Params;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod method;
pub mod observability;
pub mod params;

#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

// Re-export the transport layer for callers supplying their own
pub use async_trait::async_trait;
pub use messagebird_transport as transport;
pub use serde_json::Value as JsonValue;

/// Default REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://rest.messagebird.com/";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str =
    concat!("MessageBird/ApiClient/", env!("CARGO_PKG_VERSION"), " Rust");
