#![allow(dead_code)]

use meetline_domain::{AccessToken, MeetApiConfig};
use meetline_infra::MeetClient;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "ya29.test-token";

pub fn token() -> AccessToken {
    AccessToken::new(TEST_TOKEN).expect("token should be valid")
}

/// Meet client pointed at a mock server, with fast retries.
pub fn meet_client(server: &MockServer, page_size: u32) -> MeetClient {
    let config = MeetApiConfig {
        base_url: format!("{}/v2", server.uri()),
        timeout_secs: 5,
        max_attempts: 2,
        base_backoff_ms: 5,
        max_backoff_ms: 50,
        page_size,
    };
    MeetClient::from_config(&config).expect("meet client should build")
}
