//! Client configuration: base URL, credential tokens and request timeout.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings shared by every request a `Client` sends.
///
/// Tokens are not checked locally. An empty or wrong token surfaces as an
/// authentication failure from the remote service.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub partner_token: String,
    pub auth_token: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        partner_token: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            partner_token: partner_token.into(),
            auth_token: auth_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `VPLATFORM_BASE_URL`: API base URL (required)
    /// - `VPLATFORM_PARTNER_TOKEN`: partner token (required)
    /// - `VPLATFORM_AUTH_TOKEN`: auth token (required)
    /// - `VPLATFORM_TIMEOUT_MS`: per-request timeout in milliseconds (default: 30000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let mut config = Self::new(
            required("VPLATFORM_BASE_URL")?,
            required("VPLATFORM_PARTNER_TOKEN")?,
            required("VPLATFORM_AUTH_TOKEN")?,
        );

        if let Some(raw) = lookup("VPLATFORM_TIMEOUT_MS") {
            let ms: u64 = raw.parse().map_err(|e| ConfigError::Invalid {
                name: "VPLATFORM_TIMEOUT_MS",
                reason: format!("{e}"),
            })?;
            config.timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("partner_token", &"<redacted>")
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
