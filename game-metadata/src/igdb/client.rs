use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde::de::DeserializeOwned;

use crate::config::IgdbConfig;
use crate::error::{MetadataError, Result};

use super::auth::{AccessToken, TokenProvider};
use super::query::QueryBody;

/// IGDB resources the service reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Games,
    Artworks,
    Covers,
    Websites,
    InvolvedCompanies,
    Genres,
    Platforms,
    Collections,
    Franchises,
    Companies,
    WebsiteTypes,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Artworks => "artworks",
            Self::Covers => "covers",
            Self::Websites => "websites",
            Self::InvolvedCompanies => "involved_companies",
            Self::Genres => "genres",
            Self::Platforms => "platforms",
            Self::Collections => "collections",
            Self::Franchises => "franchises",
            Self::Companies => "companies",
            Self::WebsiteTypes => "website_types",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thin client over the IGDB catalog: token exchange plus single-shot queries.
#[derive(Clone)]
pub struct IgdbClient {
    client: Client,
    config: Arc<IgdbConfig>,
    tokens: TokenProvider,
}

impl IgdbClient {
    pub fn new(config: &IgdbConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MetadataError::Upstream(format!("Failed to create HTTP client: {e}")))?;

        let config = Arc::new(config.clone());
        let tokens = TokenProvider::new(client.clone(), config.clone());

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    pub async fn access_token(&self) -> AccessToken {
        self.tokens.access_token().await
    }

    /// Run one query against `endpoint`.
    ///
    /// `Ok(None)` means the upstream answered with a non-success status.
    /// Transport and decoding failures surface as `Err`; nothing is retried.
    pub async fn query<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        token: &AccessToken,
        body: &QueryBody,
    ) -> Result<Option<Vec<T>>> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        let body = body.build();
        tracing::debug!(%endpoint, %body, "IGDB query");

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers(token)?)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%endpoint, %status, detail = %detail, "IGDB query returned non-success status");
            return Ok(None);
        }

        let text = response.text().await?;
        let records = serde_json::from_str(&text).map_err(|e| {
            let preview: String = text.chars().take(100).collect();
            tracing::warn!(%endpoint, response_preview = %preview, error = %e, "Failed to parse IGDB response");
            e
        })?;
        Ok(Some(records))
    }

    fn auth_headers(&self, token: &AccessToken) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.insert(
            HeaderName::from_static("client-id"),
            HeaderValue::from_str(&self.config.client_id)
                .map_err(|e| MetadataError::Upstream(format!("Invalid client id header: {e}")))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                .map_err(|e| MetadataError::Upstream(format!("Invalid token header: {e}")))?,
        );
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::igdb::types::GameSummary;
    use wiremock::{
        matchers::{body_string, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_client(base_url: String) -> IgdbClient {
        let config = IgdbConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            base_url,
            timeout_secs: 5,
            ..IgdbConfig::default()
        };
        IgdbClient::new(&config).expect("client should be created")
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::InvolvedCompanies.as_str(), "involved_companies");
        assert_eq!(Endpoint::WebsiteTypes.to_string(), "website_types");
    }

    #[tokio::test]
    async fn test_query_sends_auth_headers_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/games"))
            .and(header("Client-ID", "test-client"))
            .and(header("Authorization", "Bearer token-1"))
            .and(body_string(r#"fields id,first_release_date,name; search "Celeste";"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 26226, "name": "Celeste", "first_release_date": 1516665600}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let body = QueryBody::fields(&["id", "first_release_date", "name"]).search("Celeste");
        let games: Vec<GameSummary> = client
            .query(Endpoint::Games, &AccessToken::new("token-1"), &body)
            .await
            .expect("query should succeed")
            .expect("records should be present");

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, 26226);
        assert_eq!(games[0].first_release_date, Some(1516665600));
    }

    #[tokio::test]
    async fn test_non_success_status_is_absent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/games"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Authorization Failure"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result: Option<Vec<GameSummary>> = client
            .query(
                Endpoint::Games,
                &AccessToken::default(),
                &QueryBody::fields(&["id"]),
            )
            .await
            .expect("status failures are not errors");

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/genres"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let result = client
            .query::<GameSummary>(
                Endpoint::Genres,
                &AccessToken::new("t"),
                &QueryBody::fields(&["name"]),
            )
            .await;

        assert!(matches!(result, Err(MetadataError::Json(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error() {
        let client = test_client("http://127.0.0.1:1".to_string());
        let result = client
            .query::<GameSummary>(
                Endpoint::Games,
                &AccessToken::new("t"),
                &QueryBody::fields(&["id"]),
            )
            .await;

        assert!(matches!(result, Err(MetadataError::Http(_))));
    }
}
