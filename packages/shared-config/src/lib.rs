//! Shared configuration types for the Last.fm client
//!
//! Configuration is read from environment variables. Binaries are expected
//! to load a `.env` file (via `dotenvy`) before calling
//! [`LastfmConfig::from_env`].

mod error;
mod lastfm;

pub use error::{ConfigError, ConfigResult};
pub use lastfm::{LastfmConfig, DEFAULT_API_URL};

use std::env;

/// Helper function to get a required, non-blank environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue(
            name.to_string(),
            "value cannot be empty".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Helper function to get an optional environment variable
///
/// Blank values are treated as unset.
pub fn get_optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    get_optional_env(name).unwrap_or_else(|| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_optional_env(name) {
        Some(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_env_missing() {
        temp_env::with_var_unset("LASTFM_TEST_REQUIRED", || {
            assert_eq!(
                get_required_env("LASTFM_TEST_REQUIRED"),
                Err(ConfigError::MissingEnvVar("LASTFM_TEST_REQUIRED".to_string()))
            );
        });
    }

    #[test]
    fn test_required_env_blank_is_invalid() {
        temp_env::with_var("LASTFM_TEST_REQUIRED", Some("   "), || {
            assert!(matches!(
                get_required_env("LASTFM_TEST_REQUIRED"),
                Err(ConfigError::InvalidValue(_, _))
            ));
        });
    }

    #[test]
    fn test_optional_env_blank_is_none() {
        temp_env::with_var("LASTFM_TEST_OPTIONAL", Some(""), || {
            assert_eq!(get_optional_env("LASTFM_TEST_OPTIONAL"), None);
        });
    }

    #[test]
    fn test_parse_env_default_and_value() {
        temp_env::with_var_unset("LASTFM_TEST_NUMBER", || {
            assert_eq!(parse_env("LASTFM_TEST_NUMBER", 7u64), Ok(7));
        });
        temp_env::with_var("LASTFM_TEST_NUMBER", Some("42"), || {
            assert_eq!(parse_env("LASTFM_TEST_NUMBER", 7u64), Ok(42));
        });
    }

    #[test]
    fn test_parse_env_invalid() {
        temp_env::with_var("LASTFM_TEST_NUMBER", Some("soon"), || {
            let result = parse_env("LASTFM_TEST_NUMBER", 7u64);
            assert!(matches!(result, Err(ConfigError::InvalidValue(name, _)) if name == "LASTFM_TEST_NUMBER"));
        });
    }
}
