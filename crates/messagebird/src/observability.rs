//! Structured logging for dispatched requests
//!
//! Every request/response pair is logged through this module so field names
//! stay consistent. The access key is never part of the metadata.

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method
    pub method: &'static str,
    /// Resolved request URL
    pub url: String,
    /// Request body size in bytes (optional)
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: &'static str, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body_size: None,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: Option<usize>) -> Self {
        self.body_size = size;
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = self.method,
            url = %self.url,
            body_size = self.body_size,
            "Dispatching request"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, body_size: usize, elapsed: Duration) -> Self {
        Self {
            status,
            body_size,
            elapsed,
        }
    }

    /// Log a response whose status is in the allow-list
    pub fn log_accepted(&self, request: &RequestMetadata) {
        debug!(
            method = request.method,
            url = %request.url,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            body_size = self.body_size,
            "Response received"
        );
    }

    /// Log a response whose status is rejected
    pub fn log_rejected(&self, request: &RequestMetadata) {
        warn!(
            method = request.method,
            url = %request.url,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            "Response status not accepted"
        );
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
