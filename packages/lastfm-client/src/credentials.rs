//! API credentials and session state

use std::fmt;

use crate::error::{LastfmError, LastfmResult};

/// API key, shared secret and (after authentication) a session key
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret: String,
    session_key: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .field(
                "session_key",
                &self.session_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Credentials {
    /// # Errors
    /// Returns `LastfmError::MissingApiKey` if the API key is empty
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> LastfmResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LastfmError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            secret: secret.into(),
            session_key: None,
        })
    }

    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = Some(session_key.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Shared secret, required for signed calls
    pub fn secret(&self) -> LastfmResult<&str> {
        if self.secret.is_empty() {
            return Err(LastfmError::MissingCredential("API shared secret"));
        }
        Ok(&self.secret)
    }

    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }

    /// Session key, required for calls made on behalf of a user
    pub fn require_session_key(&self) -> LastfmResult<&str> {
        self.session_key()
            .ok_or(LastfmError::MissingCredential("session key"))
    }

    pub fn set_session_key(&mut self, session_key: Option<String>) {
        self.session_key = session_key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_api_key() {
        assert!(matches!(
            Credentials::new("", "yyy"),
            Err(LastfmError::MissingApiKey)
        ));
        assert!(matches!(
            Credentials::new("  ", "yyy"),
            Err(LastfmError::MissingApiKey)
        ));
    }

    #[test]
    fn test_empty_secret_only_fails_when_used() {
        let credentials = Credentials::new("xxx", "").unwrap();
        assert_eq!(credentials.api_key(), "xxx");
        assert!(matches!(
            credentials.secret(),
            Err(LastfmError::MissingCredential(_))
        ));
    }

    #[test]
    fn test_session_key_lifecycle() {
        let mut credentials = Credentials::new("xxx", "yyy").unwrap();
        assert!(credentials.require_session_key().is_err());

        credentials.set_session_key(Some("abcdef".to_string()));
        assert_eq!(credentials.require_session_key().unwrap(), "abcdef");

        credentials.set_session_key(None);
        assert_eq!(credentials.session_key(), None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("xxx", "secret_value")
            .unwrap()
            .with_session_key("session_value");
        let debug_str = format!("{:?}", credentials);
        assert!(!debug_str.contains("secret_value"));
        assert!(!debug_str.contains("session_value"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
