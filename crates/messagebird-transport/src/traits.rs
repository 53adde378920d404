//! Transport trait and the request/response values it exchanges
//!
//! Defines the generic Transport trait that the dispatcher calls through,
//! so the HTTP library and its connection pool stay outside the dispatcher.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use encoding_rs::{Encoding, UTF_8};
use http::{HeaderMap, Method, StatusCode, header::CONTENT_TYPE};
use std::collections::HashMap;
use url::Url;

/// HTTP request specification
///
/// Represents an HTTP request to be sent via the Transport. Query parameters
/// are already encoded into `url`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,

    /// Fully resolved request URL
    pub url: Url,

    /// Request headers
    pub headers: HashMap<String, String>,

    /// Request body (optional)
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a new HTTP request
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add several headers to the request
    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Get a header value by name (case-insensitive)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response
///
/// Represents an HTTP response received from the server.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers, repeated and non-ASCII values included
    pub headers: HeaderMap,

    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status, empty when the code is unknown
    pub fn reason(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }

    /// Encoding named by the `charset` parameter of `Content-Type`
    ///
    /// UTF-8 when the header is absent, unparsable, has no charset, or names
    /// an unknown label.
    pub fn encoding(&self) -> &'static Encoding {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<mime::Mime>().ok())
            .and_then(|mime| {
                mime.get_param(mime::CHARSET)
                    .and_then(|charset| Encoding::for_label(charset.as_str().as_bytes()))
            })
            .unwrap_or(UTF_8)
    }

    /// Get the response body decoded with [`encoding`](Self::encoding)
    ///
    /// Malformed sequences are replaced with `U+FFFD`.
    pub fn text(&self) -> String {
        let (text, _, _) = self.encoding().decode(&self.body);
        text.into_owned()
    }

    /// Get the raw response body
    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }

    /// Get the first value of a header by name (case-insensitive)
    ///
    /// `None` for values that are not visible ASCII; read `headers` directly
    /// for those.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Generic transport trait for issuing one HTTP exchange
///
/// Implementations must be safe to share between concurrent callers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an HTTP request and receive a response
    ///
    /// Every status code is returned as a response; only failures to obtain
    /// one are errors.
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse>;
}
