//! Request dispatcher for the MessageBird REST API

use std::fmt;
use std::sync::Arc;

use messagebird_transport::{HttpRequest, HttpTransport, Transport};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    format::{ResponseBody, ResponseFormat},
    method::HttpMethod,
    observability::{RequestMetadata, RequestTimer, ResponseMetadata},
    params::{self, Params},
};

/// Status codes returned to the caller instead of being raised.
///
/// 401, 404, 405 and 422 carry an API error document the caller is
/// expected to inspect.
pub const ALLOWED_STATUS_CODES: [u16; 7] = [200, 201, 204, 401, 404, 405, 422];

/// Whether `status` is handed back to the caller as a normal response.
pub fn is_allowed_status(status: u16) -> bool {
    ALLOWED_STATUS_CODES.contains(&status)
}

/// Builds authenticated requests, sends them through a [`Transport`] and
/// returns the body in the requested format.
///
/// All fields are immutable after construction; clones share the transport.
///
/// # Example
///
/// ```rust,no_run
/// use messagebird::{Params, RequestDispatcher, ResponseFormat};
///
/// # async fn example() -> messagebird::Result<()> {
/// let dispatcher = RequestDispatcher::new(
///     "https://rest.messagebird.com/",
///     "live_...",
///     "my-app/1.0",
/// )?;
///
/// let balance = dispatcher.get("balance").await?;
/// let mut params = Params::new();
/// params.insert("originator".into(), "MessageBird".into());
/// let created = dispatcher
///     .request("messages", "POST", &params, ResponseFormat::Text)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RequestDispatcher {
    endpoint: String,
    access_key: SecretString,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl RequestDispatcher {
    /// Create a dispatcher backed by a default [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(
            endpoint, access_key, user_agent, transport,
        ))
    }

    /// Create a dispatcher that sends through the given transport.
    ///
    /// The transport's lifecycle (connection pool, TLS config) stays with the caller.
    pub fn with_transport(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        user_agent: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: SecretString::new(access_key.into().into_boxed_str()),
            user_agent: user_agent.into(),
            transport,
        }
    }

    /// Create a dispatcher from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if no access key is configured.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let access_key = config
            .access_key
            .ok_or_else(|| Error::MissingConfig("access key".to_string()))?;

        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self {
            endpoint: config.endpoint,
            access_key,
            user_agent: config.user_agent,
            transport,
        })
    }

    /// Base URL paths are resolved against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `GET path` with no params, returning the body as text.
    pub async fn get(&self, path: &str) -> Result<String> {
        self.request(path, "GET", &Params::new(), ResponseFormat::Text)
            .await
            .map(ResponseBody::into_text)
    }

    /// Build a request, send it and return the body.
    ///
    /// `GET` sends `params` in the query string; `DELETE`, `PATCH`, `POST` and
    /// `PUT` send them as a JSON body. Exactly one request is sent.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedMethod`] if `method` is not one of the five verbs
    ///   (nothing is sent)
    /// - [`Error::InvalidUrl`] if `path` cannot be resolved against the endpoint
    /// - [`Error::Transport`] if no response was received
    /// - [`Error::HttpTransport`] if the status is not in [`ALLOWED_STATUS_CODES`]
    pub async fn request(
        &self,
        path: &str,
        method: &str,
        params: &Params,
        format: ResponseFormat,
    ) -> Result<ResponseBody> {
        let method: HttpMethod = method.parse()?;
        let mut url = self.resolve(path)?;

        let request = if method.sends_body() {
            HttpRequest::new(method.into(), url).with_body(params::encode_body(params)?)
        } else {
            params::append_query(&mut url, params);
            HttpRequest::new(method.into(), url)
        }
        .with_headers(self.headers());

        let metadata = RequestMetadata::new(method.as_str(), request.url.as_str())
            .with_body_size(request.body.as_ref().map(Vec::len));
        metadata.log_request();

        let timer = RequestTimer::start();
        let response = self.transport.send_http(request).await?;
        let response_metadata =
            ResponseMetadata::new(response.status, response.body.len(), timer.elapsed());

        if !is_allowed_status(response.status) {
            response_metadata.log_rejected(&metadata);
            return Err(Error::from_status(
                response.status,
                response.reason(),
                &metadata.url,
            ));
        }
        response_metadata.log_accepted(&metadata);

        Ok(match format {
            ResponseFormat::Text => ResponseBody::Text(response.text()),
            ResponseFormat::Binary => ResponseBody::Binary(response.body),
        })
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.endpoint)
            .map_err(|e| Error::InvalidUrl(format!("endpoint '{}': {}", self.endpoint, e)))?;

        base.join(path).map_err(|e| {
            Error::InvalidUrl(format!(
                "Failed to construct URL from path '{}': {}",
                path, e
            ))
        })
    }

    fn headers(&self) -> [(&'static str, String); 4] {
        [
            ("Accept", "application/json".to_string()),
            (
                "Authorization",
                format!("AccessKey {}", self.access_key.expose_secret()),
            ),
            ("User-Agent", self.user_agent.clone()),
            ("Content-Type", "application/json".to_string()),
        ]
    }
}

impl fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("endpoint", &self.endpoint)
            .field("access_key", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
