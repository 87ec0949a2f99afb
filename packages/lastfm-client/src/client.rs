//! Last.fm client handle

use std::fmt;
use std::sync::Arc;

use lastfm_shared_config::LastfmConfig;
use tracing::debug;

use crate::call_spec::{AuthPolicy, HttpVerb};
use crate::credentials::Credentials;
use crate::error::{LastfmResult, ServiceErrorCode};
use crate::invoker::MethodInvoker;
use crate::methods::{Album, Artist, Auth, Geo, Library, Track, User};
use crate::params::ParameterSet;
use crate::transport::{HttpTransport, Transport};
use crate::xml::NormalizedNode;

/// Last.fm web service client
///
/// Owns the credentials and hands out per-resource views over the method
/// catalogue. Cloning shares credentials and the HTTP connection pool.
#[derive(Clone)]
pub struct LastfmClient {
    invoker: MethodInvoker,
}

/// Outcome of [`LastfmClient::validate_api_key`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyStatus {
    Valid,
    /// The service answered with error 10
    Invalid,
    /// The check never got an answer about the key; holds the error text
    Unknown(String),
}

impl fmt::Debug for LastfmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmClient")
            .field("invoker", &self.invoker)
            .finish()
    }
}

impl LastfmClient {
    /// Create a client talking to `config.api_url` over HTTP
    ///
    /// # Errors
    /// - `LastfmError::MissingApiKey` if the API key is empty
    /// - `LastfmError::Http` if the HTTP client cannot be built
    pub fn new(config: &LastfmConfig) -> LastfmResult<Self> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client from `LASTFM_*` environment variables
    ///
    /// # Errors
    /// - `LastfmError::Config` if a required variable is missing or invalid
    pub fn from_env() -> LastfmResult<Self> {
        let config = LastfmConfig::from_env()?;
        Self::new(&config)
    }

    /// Create a client over a caller-supplied transport
    ///
    /// # Errors
    /// Returns `LastfmError::MissingApiKey` if the API key is empty
    pub fn with_transport(
        config: &LastfmConfig,
        transport: Arc<dyn Transport>,
    ) -> LastfmResult<Self> {
        let mut credentials = Credentials::new(&config.api_key, &config.api_secret)?;
        credentials.set_session_key(config.session_key.clone());

        debug!(
            api_url = %config.api_url,
            has_session = config.session_key.is_some(),
            "Created Last.fm client"
        );

        Ok(Self {
            invoker: MethodInvoker::new(credentials, transport),
        })
    }

    /// Store (or clear) the session key used by session-bound methods
    pub fn set_session(&self, session_key: Option<String>) {
        self.invoker.set_session(session_key);
    }

    pub fn session_key(&self) -> Option<String> {
        self.invoker.session_key()
    }

    pub fn invoker(&self) -> &MethodInvoker {
        &self.invoker
    }

    /// Send a method that is not in the catalogue
    pub async fn request(
        &self,
        method: &str,
        params: ParameterSet,
        verb: HttpVerb,
        auth: AuthPolicy,
    ) -> LastfmResult<NormalizedNode> {
        self.invoker.request(method, params, verb, auth).await
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.invoker)
    }

    pub fn artist(&self) -> Artist<'_> {
        Artist::new(&self.invoker)
    }

    pub fn album(&self) -> Album<'_> {
        Album::new(&self.invoker)
    }

    pub fn geo(&self) -> Geo<'_> {
        Geo::new(&self.invoker)
    }

    pub fn library(&self) -> Library<'_> {
        Library::new(&self.invoker)
    }

    pub fn track(&self) -> Track<'_> {
        Track::new(&self.invoker)
    }

    pub fn user(&self) -> User<'_> {
        User::new(&self.invoker)
    }

    /// Check the API key with a one-result `artist.getSimilar` call
    pub async fn validate_api_key(&self) -> ApiKeyStatus {
        let result = self.artist().get_similar("Cher", Some(1)).await;
        match result {
            Ok(_) => ApiKeyStatus::Valid,
            Err(e) if e.service_code() == Some(ServiceErrorCode::InvalidApiKey) => {
                ApiKeyStatus::Invalid
            }
            Err(e) => {
                debug!(error = %e, "API key check inconclusive");
                ApiKeyStatus::Unknown(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LastfmError;

    fn config() -> LastfmConfig {
        LastfmConfig::new("test_api_key", "test_secret")
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = LastfmClient::new(&LastfmConfig::new("", "secret"));
        assert!(matches!(result, Err(LastfmError::MissingApiKey)));
    }

    #[test]
    fn test_client_accepts_valid_config() {
        assert!(LastfmClient::new(&config()).is_ok());
    }

    #[test]
    fn test_client_debug_redacts_credentials() {
        let client = LastfmClient::new(&config()).unwrap();
        client.set_session(Some("session_value".to_string()));

        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("test_secret"));
        assert!(!debug_str.contains("session_value"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_session_from_config() {
        let client =
            LastfmClient::new(&config().with_session_key("configured_session")).unwrap();
        assert_eq!(client.session_key().as_deref(), Some("configured_session"));

        client.set_session(None);
        assert_eq!(client.session_key(), None);
    }

    #[test]
    fn test_clones_share_session() {
        let client = LastfmClient::new(&config()).unwrap();
        let clone = client.clone();
        client.set_session(Some("abcdef".to_string()));
        assert_eq!(clone.session_key().as_deref(), Some("abcdef"));
    }

    #[tokio::test]
    async fn test_unreachable_service_leaves_key_unknown() {
        let client = LastfmClient::new(&config().with_api_url("http://127.0.0.1:1/")).unwrap();
        assert!(matches!(
            client.validate_api_key().await,
            ApiKeyStatus::Unknown(reason) if !reason.is_empty()
        ));
    }
}
