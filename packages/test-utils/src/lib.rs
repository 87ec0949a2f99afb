//! Shared test utilities for the Last.fm workspace
//!
//! This crate provides a mock Last.fm endpoint and canned XML responses for
//! testing the client without network access.
//!
//! # Mock Services
//!
//! - [`MockLastfmServer`] - wiremock-backed `/2.0/` endpoint
//! - [`fixtures`] - `<lfm>` response bodies shaped like the real service
//!
//! # Example
//!
//! ```rust,ignore
//! use lastfm_test_utils::{fixtures, MockLastfmServer};
//!
//! #[tokio::test]
//! async fn test_with_mock() {
//!     let server = MockLastfmServer::start().await;
//!     server.mock_get("auth.getToken", fixtures::AUTH_GET_TOKEN).await;
//!
//!     // Point LastfmConfig::with_api_url at server.url()
//! }
//! ```

pub mod fixtures;
mod lastfm;

pub use lastfm::{failed_body, MockLastfmServer, RecordedRequest};
