/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cryptsy-adapter tests

use std::sync::Arc;

use cryptsy_adapter::{ClientConfig, CounterNonce, Credentials, CryptsyClient};
use wiremock::{MockServer, Request};

pub const TEST_API_KEY: &str = "public-key";
pub const TEST_SECRET: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_SECRET)
}

/// Client against the mock server using the wall-clock nonce
pub fn client_for(server: &MockServer) -> CryptsyClient {
    client_with(server, test_credentials())
}

/// Client against the mock server signing with `credentials`
pub fn client_with(server: &MockServer, credentials: Credentials) -> CryptsyClient {
    CryptsyClient::with_config_and_base_urls(
        credentials,
        ClientConfig::default(),
        &format!("{}/api.php", server.uri()),
        &format!("{}/api", server.uri()),
    )
    .expect("client init")
}

/// Client against the mock server whose first nonce is `start`
#[allow(dead_code)]
pub fn counter_client_for(server: &MockServer, start: u64) -> CryptsyClient {
    client_for(server).with_nonce_source(Arc::new(CounterNonce::starting_at(start)))
}

/// Decode a form body into ordered key/value pairs
#[allow(dead_code)]
pub fn form_pairs(request: &Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[allow(dead_code)]
pub fn form_value(request: &Request, key: &str) -> Option<String> {
    form_pairs(request)
        .into_iter()
        .find_map(|(k, v)| (k == key).then_some(v))
}

#[allow(dead_code)]
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[allow(dead_code)]
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
}
