//! Last.fm API error types

use lastfm_shared_config::ConfigError;
use thiserror::Error;

/// Last.fm API client errors
#[derive(Error, Debug)]
pub enum LastfmError {
    /// API key is missing or empty
    #[error("API key is required for Last.fm API access")]
    MissingApiKey,

    /// A credential needed by the call (shared secret, session key) is not set
    #[error("{0} is required for this Last.fm method")]
    MissingCredential(&'static str),

    /// Configuration could not be loaded
    #[error("Invalid Last.fm configuration: {0}")]
    Config(#[from] ConfigError),

    /// A required method parameter was missing or nil
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not well-formed XML
    #[error("Failed to parse Last.fm response: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Response is XML but not shaped the way the method expects
    #[error("Unexpected Last.fm response: {0}")]
    UnexpectedResponse(String),

    /// Last.fm answered with `status="failed"`
    #[error("Last.fm API error {code}: {message}")]
    Api { code: i32, message: String },
}

/// Error codes documented by the Last.fm web service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorCode {
    InvalidService,
    InvalidMethod,
    AuthenticationFailed,
    InvalidFormat,
    InvalidParameters,
    InvalidResource,
    OperationFailed,
    InvalidSessionKey,
    InvalidApiKey,
    ServiceOffline,
    InvalidSignature,
    TemporaryError,
    SuspendedApiKey,
    RateLimitExceeded,
    Other(i32),
}

impl From<i32> for ServiceErrorCode {
    fn from(code: i32) -> Self {
        match code {
            2 => Self::InvalidService,
            3 => Self::InvalidMethod,
            4 => Self::AuthenticationFailed,
            5 => Self::InvalidFormat,
            6 => Self::InvalidParameters,
            7 => Self::InvalidResource,
            8 => Self::OperationFailed,
            9 => Self::InvalidSessionKey,
            10 => Self::InvalidApiKey,
            11 => Self::ServiceOffline,
            13 => Self::InvalidSignature,
            16 => Self::TemporaryError,
            26 => Self::SuspendedApiKey,
            29 => Self::RateLimitExceeded,
            other => Self::Other(other),
        }
    }
}

impl LastfmError {
    /// The service error code, if Last.fm itself reported the failure
    pub fn service_code(&self) -> Option<ServiceErrorCode> {
        match self {
            LastfmError::Api { code, .. } => Some(ServiceErrorCode::from(*code)),
            _ => None,
        }
    }

    /// Check if this error is worth retrying (transient failure)
    ///
    /// The client never retries on its own; this only classifies. HTTP status
    /// codes are not consulted: every response body is decoded, so a 5xx
    /// surfaces as a service error or an unexpected response instead.
    pub fn is_retryable(&self) -> bool {
        match self {
            LastfmError::Http(e) => e.is_timeout() || e.is_connect(),
            LastfmError::Api { .. } => matches!(
                self.service_code(),
                Some(
                    ServiceErrorCode::ServiceOffline
                        | ServiceErrorCode::TemporaryError
                        | ServiceErrorCode::RateLimitExceeded
                )
            ),
            _ => false,
        }
    }
}

/// Result type for Last.fm operations
pub type LastfmResult<T> = Result<T, LastfmError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: i32) -> LastfmError {
        LastfmError::Api {
            code,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_service_code_mapping() {
        assert_eq!(api(10).service_code(), Some(ServiceErrorCode::InvalidApiKey));
        assert_eq!(api(9).service_code(), Some(ServiceErrorCode::InvalidSessionKey));
        assert_eq!(api(42).service_code(), Some(ServiceErrorCode::Other(42)));
        assert_eq!(LastfmError::MissingApiKey.service_code(), None);
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(api(29).is_retryable());
        assert!(api(11).is_retryable());
        assert!(api(16).is_retryable());
        assert!(!api(10).is_retryable());
        assert!(!LastfmError::MissingApiKey.is_retryable());
        assert!(!LastfmError::InvalidArgument("token".to_string()).is_retryable());
        assert!(!LastfmError::UnexpectedResponse("x".to_string()).is_retryable());
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(api(6).to_string(), "Last.fm API error 6: boom");
    }
}
