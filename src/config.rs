//! Client configuration.

use crate::http::AuthConfig;
use std::time::Duration;

/// Default HTTP request timeout.
pub const TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`crate::WhartClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including any mount prefix (e.g.
    /// `https://host/api`). Resource paths are joined onto this.
    pub base_url: String,
    /// Optional authentication applied to every request.
    pub auth: Option<AuthConfig>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Configuration with default timeouts and no authentication.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            timeout: TIMEOUT,
            connect_timeout: CONNECT_TIMEOUT,
        }
    }

    /// Authenticate with a JWT bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthConfig::Bearer(token.into()));
        self
    }

    /// Authenticate with an API key sent in a custom header.
    #[must_use]
    pub fn with_api_key(mut self, header: impl Into<String>, key: impl Into<String>) -> Self {
        self.auth = Some(AuthConfig::ApiKey {
            header: header.into(),
            key: key.into(),
        });
        self
    }
}
