use std::fmt;
use std::sync::Arc;

use reqwest::Client;

use crate::config::IgdbConfig;

use super::types::TokenResponse;

/// Bearer credential for one top-level operation. Never cached.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken")
            .field(&if self.is_empty() { "<empty>" } else { "<redacted>" })
            .finish()
    }
}

/// Exchanges client credentials for a bearer token (OAuth client-credentials grant).
#[derive(Clone)]
pub struct TokenProvider {
    client: Client,
    config: Arc<IgdbConfig>,
}

impl TokenProvider {
    pub fn new(client: Client, config: Arc<IgdbConfig>) -> Self {
        Self { client, config }
    }

    /// Fetch a fresh token.
    ///
    /// Failures never abort the caller: a rejected exchange or a transport
    /// error yields an empty token, and the query that uses it fails on its
    /// own terms.
    pub async fn access_token(&self) -> AccessToken {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = match self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "Token request failed, continuing with empty token");
                return AccessToken::default();
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Token endpoint rejected credentials, continuing with empty token");
            return AccessToken::default();
        }

        match response.json::<TokenResponse>().await {
            Ok(body) => AccessToken::new(body.access_token),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse token response, continuing with empty token");
                AccessToken::default()
            }
        }
    }
}
