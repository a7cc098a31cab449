pub mod handlers;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::{Config, IgdbConfig, SearchConfig, ServerConfig};

    fn test_state(base_url: &str, client_id: &str) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            igdb: IgdbConfig {
                client_id: client_id.to_string(),
                client_secret: "secret".to_string(),
                token_url: format!("{base_url}/oauth2/token"),
                base_url: base_url.to_string(),
                timeout_secs: 5,
            },
            search: SearchConfig::default(),
        };
        AppState::new(config).expect("state should build")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get(state: AppState, uri: &str) -> axum::response::Response {
        create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_credentials() {
        let response = get(test_state("http://127.0.0.1:1", "client"), "/api/v1/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["igdb"]["configured"], true);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn health_without_client_id_is_unconfigured() {
        let response = get(test_state("http://127.0.0.1:1", ""), "/api/v1/health").await;

        let json = body_json(response).await;
        assert_eq!(json["data"]["igdb"]["configured"], false);
    }

    #[tokio::test]
    async fn openapi_json_is_valid() {
        let response = get(test_state("http://127.0.0.1:1", "c"), "/api/v1/openapi.json").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(
            version.starts_with('3'),
            "OpenAPI version should start with 3, got: {version}"
        );
        assert!(json["paths"]["/api/v1/games/{operation}"].is_object());
    }

    #[tokio::test]
    async fn unknown_operation_is_not_found() {
        let response = get(
            test_state("http://127.0.0.1:1", "c"),
            "/api/v1/games/search?name=Celeste",
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(
            json["error"]["message"],
            "Invalid endpoint! Use /[options|info|recommendations]"
        );
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn missing_parameter_is_invalid_request() {
        let response = get(test_state("http://127.0.0.1:1", "c"), "/api/v1/games/info").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
        assert_eq!(
            json["error"]["message"],
            "Missing parameter for the info endpoint"
        );
    }

    #[tokio::test]
    async fn options_returns_candidate_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok",
                "expires_in": 5000,
                "token_type": "bearer"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/games"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 26226, "name": "Celeste", "first_release_date": 1516665600 },
                { "id": 1, "name": "Celeste Bundle" }
            ])))
            .mount(&server)
            .await;

        let response = get(
            test_state(&server.uri(), "c"),
            "/api/v1/games/options?name=celeste",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["data"],
            serde_json::json!([{ "id": "26226", "name": "Celeste (2018)" }])
        );
    }

    #[tokio::test]
    async fn unreachable_upstream_info_is_not_found() {
        let response = get(
            test_state("http://127.0.0.1:1", "c"),
            "/api/v1/games/info?id=26226",
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }
}
