//! Last.fm web service client
//!
//! This crate implements the request pipeline of the Last.fm 2.0 API:
//! - MD5 request signing with the shared secret
//! - GET/POST dispatch with API key, signature and session key
//! - XML response normalization into a generic tree
//! - Service error decoding into typed errors
//! - A declarative method catalogue with typed wrappers
//!
//! # Example
//!
//! ```rust,no_run
//! use lastfm_client::{LastfmClient, Paging};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LastfmClient::from_env()?;
//!
//! // Similar artists
//! let similar = client.artist().get_similar("Cher", Some(10)).await?;
//! for artist in &similar {
//!     println!("{}", artist["name"].text().unwrap_or_default());
//! }
//!
//! // Authenticated calls need a session key
//! let token = client.auth().get_token().await?;
//! // ... let the user authorize `token` on last.fm ...
//! let session = client.auth().get_session(&token).await?;
//! client.set_session(Some(session.key));
//! client.track().love("Cher", "Believe").await?;
//!
//! let neighbours = client.user().get_neighbours("rj", None, Paging::limit(5)).await?;
//! println!("{} neighbours", neighbours.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `LASTFM_API_KEY`: API key (required)
//! - `LASTFM_API_SECRET`: shared secret (required)
//! - `LASTFM_SESSION_KEY`: session key for write methods (optional)
//! - `LASTFM_API_URL`: endpoint (default `http://ws.audioscrobbler.com/2.0/`)
//! - `LASTFM_TIMEOUT`: request timeout in seconds (default 10)
//! - `LASTFM_USER_AGENT`: HTTP user agent

mod call_spec;
mod client;
mod credentials;
pub mod decoder;
mod error;
mod invoker;
pub mod methods;
mod models;
mod params;
mod request;
pub mod signer;
mod transport;
mod xml;

pub use call_spec::{AuthPolicy, CallSpec, HttpVerb, ParamDefault};
pub use client::{ApiKeyStatus, LastfmClient};
pub use credentials::Credentials;
pub use error::{LastfmError, LastfmResult, ServiceErrorCode};
pub use invoker::MethodInvoker;
pub use models::{Paging, Session, TimeRange};
pub use params::{ParamValue, ParameterSet};
pub use request::{PreparedRequest, RequestBuilder};
pub use transport::{HttpTransport, Transport};
pub use xml::{normalize_element, LfmDocument, NormalizedNode, CONTENT_KEY};

pub use lastfm_shared_config::LastfmConfig;
