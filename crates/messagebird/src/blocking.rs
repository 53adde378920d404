//! Blocking wrapper around [`RequestDispatcher`](crate::RequestDispatcher)
//!
//! Each call blocks the current thread until the single HTTP exchange has
//! completed. Must not be used from within an async runtime.

use std::sync::Arc;

use messagebird_transport::Transport;
use tokio::runtime::{Builder, Runtime};

use crate::{
    config::ClientConfig,
    error::Result,
    format::{ResponseBody, ResponseFormat},
    params::Params,
};

/// Synchronous request dispatcher.
///
/// ```rust,no_run
/// use messagebird::blocking::RequestDispatcher;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = RequestDispatcher::new("https://rest.messagebird.com/", "live_...", "my-app/1.0")?;
/// let balance = dispatcher.get("balance")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RequestDispatcher {
    inner: crate::RequestDispatcher,
    runtime: Runtime,
}

impl RequestDispatcher {
    /// Create a blocking dispatcher backed by a default HTTP transport.
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            inner: crate::RequestDispatcher::new(endpoint, access_key, user_agent)?,
            runtime: runtime()?,
        })
    }

    /// Create a blocking dispatcher that sends through the given transport.
    pub fn with_transport(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        user_agent: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self {
            inner: crate::RequestDispatcher::with_transport(
                endpoint, access_key, user_agent, transport,
            ),
            runtime: runtime()?,
        })
    }

    /// Create a blocking dispatcher from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: crate::RequestDispatcher::from_config(config)?,
            runtime: runtime()?,
        })
    }

    /// The wrapped async dispatcher.
    pub fn inner(&self) -> &crate::RequestDispatcher {
        &self.inner
    }

    /// Blocking form of [`crate::RequestDispatcher::get`].
    pub fn get(&self, path: &str) -> Result<String> {
        self.runtime.block_on(self.inner.get(path))
    }

    /// Blocking form of [`crate::RequestDispatcher::request`].
    pub fn request(
        &self,
        path: &str,
        method: &str,
        params: &Params,
        format: ResponseFormat,
    ) -> Result<ResponseBody> {
        self.runtime
            .block_on(self.inner.request(path, method, params, format))
    }
}

fn runtime() -> std::io::Result<Runtime> {
    Builder::new_current_thread().enable_all().build()
}
