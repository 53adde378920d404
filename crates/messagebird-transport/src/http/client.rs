//! HTTP transport client implementation
//!
//! Implements the Transport trait on top of a shared reqwest client. Exactly
//! one HTTP exchange per call; no retries.

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::Duration;

/// HTTP transport implementation
///
/// Handles HTTP requests with:
/// - TLS certificate verification (cannot be disabled)
/// - Connection pooling owned by the underlying reqwest client
/// - Optional timeouts configured at construction
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Arc<ReqwestClient>,
}

impl HttpTransport {
    /// Create a new HTTP transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a new HTTP transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder()
            .use_rustls_tls()
            .https_only(config.https_only)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        // Builder failures are configuration errors, surfaced as `InvalidRequest`
        let client = builder.build()?;

        Ok(Self::from_client(client))
    }

    /// Wrap a reqwest client whose lifecycle is managed by the caller
    pub fn from_client(client: ReqwestClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying reqwest client
    pub fn reqwest_client(&self) -> Arc<ReqwestClient> {
        self.client.clone()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut req = self.client.request(method, url);

        for (key, value) in &headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        tracing::trace!(status, body_size = body.len(), "Transport received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// HTTP transport configuration
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Total request timeout, none by default
    pub timeout: Option<Duration>,

    /// Connection timeout, none by default
    pub connect_timeout: Option<Duration>,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Refuse any URL that is not `https://`
    pub https_only: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            pool_max_idle_per_host: 10,
            https_only: true,
        }
    }
}
