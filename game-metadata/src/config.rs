use serde::Deserialize;
use std::env;

pub const DEFAULT_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
pub const DEFAULT_IGDB_BASE_URL: &str = "https://api.igdb.com/v4";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse a comma-separated env var into trimmed, lowercased, non-empty entries.
fn parse_env_list(var: &str, default: &[&str]) -> Vec<String> {
    match env::var(var) {
        Ok(val) if !val.trim().is_empty() => val
            .split(',')
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect(),
        _ => default.iter().map(|word| word.to_string()).collect(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub igdb: IgdbConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream catalog credentials and endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct IgdbConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl IgdbConfig {
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Tuning for the free-text option search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Lowercase markers of bundle SKUs that are never offered as options.
    pub bad_words: Vec<String>,
    /// How many times the numeral fallback may re-run the search.
    pub fallback_depth: u32,
    /// Trailing numbers above this are not rewritten as Roman numerals.
    pub max_numeral: u64,
}

impl Default for IgdbConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            base_url: DEFAULT_IGDB_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bad_words: vec!["bundle".to_string(), "pack".to_string()],
            fallback_depth: 1,
            max_numeral: 3999,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("GAME_METADATA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("GAME_METADATA_PORT", 3000),
            },
            igdb: IgdbConfig {
                client_id: env::var("IGDB_CLIENT_ID").unwrap_or_default(),
                client_secret: env::var("IGDB_CLIENT_SECRET").unwrap_or_default(),
                token_url: env::var("IGDB_TOKEN_URL")
                    .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
                base_url: env::var("IGDB_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|_| DEFAULT_IGDB_BASE_URL.to_string()),
                timeout_secs: parse_env_or("IGDB_TIMEOUT", 30),
            },
            search: SearchConfig {
                bad_words: parse_env_list("SEARCH_BAD_WORDS", &["bundle", "pack"]),
                fallback_depth: parse_env_or("SEARCH_FALLBACK_DEPTH", 1),
                max_numeral: parse_env_or("SEARCH_MAX_NUMERAL", 3999),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
