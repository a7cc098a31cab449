#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use game_metadata::config::{IgdbConfig, SearchConfig};
use game_metadata::igdb::IgdbClient;
use game_metadata::services::GameMetadataService;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_CLIENT_ID: &str = "test-client";

pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("game_metadata=debug")
        .with_test_writer()
        .try_init();
}

/// Mock IGDB with a working token endpoint already mounted.
pub async fn mock_igdb() -> MockServer {
    init_test_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "expires_in": 5587808,
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;
    server
}

pub fn igdb_config(server: &MockServer) -> IgdbConfig {
    IgdbConfig {
        client_id: TEST_CLIENT_ID.to_string(),
        client_secret: "test-secret".to_string(),
        token_url: format!("{}/oauth2/token", server.uri()),
        base_url: server.uri(),
        timeout_secs: 5,
    }
}

pub fn client(server: &MockServer) -> IgdbClient {
    IgdbClient::new(&igdb_config(server)).expect("client should be created")
}

pub fn service(server: &MockServer) -> GameMetadataService {
    GameMetadataService::new(client(server), SearchConfig::default())
}

/// Respond to `POST /{resource}` with `body`.
pub async fn mount_resource(server: &MockServer, resource: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(format!("/{resource}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
