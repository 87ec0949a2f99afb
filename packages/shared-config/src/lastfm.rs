//! Last.fm web service configuration types

use std::fmt;

use crate::{get_env_or_default, get_optional_env, get_required_env, parse_env};
use crate::{ConfigError, ConfigResult};

/// Last.fm 2.0 API endpoint
pub const DEFAULT_API_URL: &str = "http://ws.audioscrobbler.com/2.0/";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Last.fm web service configuration
#[derive(Clone)]
pub struct LastfmConfig {
    /// API key issued by Last.fm
    pub api_key: String,

    /// Shared secret paired with the API key, used for request signatures
    pub api_secret: String,

    /// Session key from a previous authentication, if any
    pub session_key: Option<String>,

    /// Base endpoint every method is sent to
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl fmt::Debug for LastfmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field(
                "session_key",
                &self.session_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl LastfmConfig {
    /// Load Last.fm configuration from environment variables
    ///
    /// `LASTFM_API_KEY` and `LASTFM_API_SECRET` are required. Everything else
    /// falls back to a default.
    pub fn from_env() -> ConfigResult<Self> {
        let api_url = get_env_or_default("LASTFM_API_URL", DEFAULT_API_URL);
        validate_url("LASTFM_API_URL", &api_url)?;

        Ok(Self {
            api_key: get_required_env("LASTFM_API_KEY")?,
            api_secret: get_required_env("LASTFM_API_SECRET")?,
            session_key: get_optional_env("LASTFM_SESSION_KEY"),
            api_url,
            timeout_secs: parse_env("LASTFM_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
            user_agent: get_env_or_default("LASTFM_USER_AGENT", &default_user_agent()),
        })
    }

    /// Create a configuration with custom credentials (useful for testing)
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            session_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Point the configuration at a different endpoint (mock servers, proxies)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Start from an existing session key
    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = Some(session_key.into());
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check if the environment carries the required Last.fm credentials
    pub fn is_configured() -> bool {
        get_optional_env("LASTFM_API_KEY").is_some()
            && get_optional_env("LASTFM_API_SECRET").is_some()
    }
}

fn default_user_agent() -> String {
    format!("lastfm-client/{}", env!("CARGO_PKG_VERSION"))
}

fn validate_url(name: &str, value: &str) -> ConfigResult<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl(
            name.to_string(),
            format!("unsupported scheme '{}'", other),
        )),
    }
}
