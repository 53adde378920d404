//! HTTP transport layer for the MessageBird REST client
//!
//! Provides the trait-based collaborator the request dispatcher sends its
//! requests through, plus the default `reqwest`-backed implementation.
//!
//! # Architecture
//!
//! - **Transport trait**: one request in, one response out
//! - **HTTP transport**: REST client via reqwest, certificate verification always on
//! - **Error handling**: network-level failures only; any HTTP status is a response

#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! # Usage
//!
//! ```ignore
//! use messagebird_transport::{HttpRequest, HttpTransport, Method, Transport};
//!
//! let transport = HttpTransport::new()?;
//! let url = "https://rest.messagebird.com/balance".parse()?;
//! let response = transport.send_http(HttpRequest::new(Method::GET, url)).await?;
//! ```

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};

pub use ::http::{HeaderMap, Method};
pub use url::Url;
