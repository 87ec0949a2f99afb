//! Shared setup for client integration tests

#![allow(dead_code)]

use lastfm_client::{LastfmClient, LastfmConfig};
use lastfm_test_utils::MockLastfmServer;

pub const API_KEY: &str = "xxx";
pub const SECRET: &str = "yyy";

/// Client pointed at the mock endpoint, without a session
pub fn client_for(server: &MockLastfmServer) -> LastfmClient {
    let config = LastfmConfig::new(API_KEY, SECRET).with_api_url(server.url());
    LastfmClient::new(&config).expect("client should build")
}

/// Client pointed at the mock endpoint with session key `abcdef`
pub fn session_client_for(server: &MockLastfmServer) -> LastfmClient {
    let client = client_for(server);
    client.set_session(Some("abcdef".to_string()));
    client
}
