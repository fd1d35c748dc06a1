/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitx-adapter tests

use bitx_adapter::{BitxClient, ClientConfig, Credentials};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// API key pair accepted by the mocks
pub fn test_credentials() -> Credentials {
    Credentials::new("12345", "0000000000000000")
}

/// Authenticated client pointed at the mock server
pub fn authed_client(server: &MockServer) -> BitxClient {
    let mut client = BitxClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    client.set_credentials(test_credentials());
    client
}

/// Pending v1 order fixture
#[allow(dead_code)]
pub fn pending_order(order_id: &str) -> serde_json::Value {
    serde_json::json!({
        "order_id": order_id,
        "creation_timestamp": 1367849297609i64,
        "expiration_timestamp": 0,
        "type": "BID",
        "state": "PENDING",
        "limit_price": "0.0001",
        "limit_volume": "9999.99",
        "base": "0.00",
        "counter": "0.00",
        "fee_base": "0.00",
        "fee_counter": "0.00",
        "pair": "XBTZAR"
    })
}
