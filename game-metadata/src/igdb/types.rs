//! Raw record shapes returned by the IGDB API.
//!
//! These only live for the duration of one request and never leave the
//! service layer; the wire-facing types are in `crate::models`.

use serde::Deserialize;

pub type IgdbId = u64;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Projection used for option and recommendation listings.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSummary {
    pub id: IgdbId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_release_date: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimilarGames {
    #[serde(default)]
    pub similar_games: Vec<IgdbId>,
}

/// Full projection of a single game used to seed a detail record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameRecord {
    pub id: IgdbId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub aggregated_rating: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub first_release_date: Option<i64>,
    #[serde(default)]
    pub artworks: Vec<IgdbId>,
    #[serde(default)]
    pub cover: Option<IgdbId>,
    #[serde(default)]
    pub genres: Vec<IgdbId>,
    #[serde(default)]
    pub platforms: Vec<IgdbId>,
    #[serde(default)]
    pub involved_companies: Vec<IgdbId>,
    #[serde(default)]
    pub websites: Vec<IgdbId>,
    #[serde(default)]
    pub collection: Option<IgdbId>,
    #[serde(default)]
    pub collections: Vec<IgdbId>,
    #[serde(default)]
    pub franchise: Option<IgdbId>,
    #[serde(default)]
    pub franchises: Vec<IgdbId>,
}

/// Artwork or cover image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub url: Option<String>,
}

/// Any lookup resource reduced to its display name (genres, platforms,
/// collections, franchises, companies).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRecord {
    pub id: IgdbId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvolvedCompany {
    #[serde(default)]
    pub company: Option<IgdbId>,
    #[serde(default)]
    pub developer: bool,
    #[serde(default)]
    pub publisher: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteRecord {
    #[serde(default, rename = "type")]
    pub website_type: Option<IgdbId>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteType {
    pub id: IgdbId,
    #[serde(default, rename = "type")]
    pub label: Option<String>,
}
