//! Configuration for the MessageBird request dispatcher

use secrecy::SecretString;
use serde::Deserialize;

use crate::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};

/// Configuration for building a [`RequestDispatcher`](crate::RequestDispatcher).
///
/// Deserializable so it can be embedded in an application's own config file;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL requests are resolved against
    pub endpoint: String,

    /// Access key sent as `Authorization: AccessKey <key>`
    pub access_key: Option<SecretString>,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an access key and default endpoint.
    pub fn with_access_key(access_key: impl Into<String>) -> Self {
        Self {
            access_key: Some(SecretString::new(access_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Override the endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// This will look for:
    /// - `MESSAGEBIRD_ACCESS_KEY` for authentication
    /// - `MESSAGEBIRD_ENDPOINT` for the API base URL
    /// - `MESSAGEBIRD_USER_AGENT` for the user agent
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(access_key) = env::var("MESSAGEBIRD_ACCESS_KEY") {
            config.access_key = Some(SecretString::new(access_key.into_boxed_str()));
        }

        if let Ok(endpoint) = env::var("MESSAGEBIRD_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(user_agent) = env::var("MESSAGEBIRD_USER_AGENT") {
            config.user_agent = user_agent;
        }

        config
    }
}
