//! Fully enriched game record and the staged builder that assembles it.
//!
//! Assembly happens in a fixed order:
//!
//! 1. [`DetailRecordBuilder::seed`] copies the primary game record.
//! 2. The `with_*` setters store the first fan-out results (images, names,
//!    involved companies and raw websites).
//! 3. [`DetailRecordBuilder::company_ids`] and
//!    [`DetailRecordBuilder::website_type_ids`] expose the ids that still
//!    need translating.
//! 4. [`DetailRecordBuilder::build`] folds the translation tables in and
//!    freezes the result.
//!
//! Raw ids, timestamps and lookup tables only exist on the builder, so a
//! [`DetailRecord`] cannot carry them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::igdb::types::{GameRecord, IgdbId, InvolvedCompany, WebsiteRecord};

use super::candidate::display_name;

pub const IGDB_LINK_NAME: &str = "IGDB";
const IGDB_GAME_PAGE: &str = "https://www.igdb.com/games";

/// Named external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Detailed game metadata returned by the `info` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DetailRecord {
    pub id: String,
    /// Title, with ` (YYYY)` appended when a release date is known.
    pub name: String,
    /// Full-size artwork URLs.
    pub artworks: Vec<String>,
    /// Full-size cover URL, empty when the game has none.
    pub cover: String,
    pub description: String,
    /// First release as `YYYY-MM-DD` (UTC); `1970-01-01` when unknown.
    pub release_date: String,
    /// Aggregated critic rating, 0-100.
    pub critics_score: u8,
    /// Community rating, 0-100.
    pub community_score: u8,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    /// Franchise names followed by collection names.
    pub series: Vec<String>,
    /// Developer company names.
    pub creators: Vec<String>,
    /// Publisher company names.
    pub publishers: Vec<String>,
    /// External links; the last entry always points at the IGDB page.
    pub links: Vec<Link>,
}

#[derive(Debug, Clone)]
pub struct DetailRecordBuilder {
    id: String,
    name: String,
    description: String,
    release_date: String,
    critics_score: u8,
    community_score: u8,
    page_url: String,
    artworks: Vec<String>,
    cover: String,
    genres: Vec<String>,
    platforms: Vec<String>,
    franchises: Vec<String>,
    collections: Vec<String>,
    creator_ids: Vec<IgdbId>,
    publisher_ids: Vec<IgdbId>,
    websites: Vec<WebsiteRecord>,
}

impl DetailRecordBuilder {
    pub fn seed(game: &GameRecord) -> Self {
        let released = game
            .first_release_date
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .unwrap_or_default();

        Self {
            id: game.id.to_string(),
            name: display_name(&game.name, game.first_release_date),
            description: game.summary.clone().unwrap_or_default(),
            release_date: released.format("%Y-%m-%d").to_string(),
            critics_score: score(game.aggregated_rating),
            community_score: score(game.rating),
            page_url: game
                .url
                .clone()
                .unwrap_or_else(|| format!("{IGDB_GAME_PAGE}/{}", game.id)),
            artworks: Vec::new(),
            cover: String::new(),
            genres: Vec::new(),
            platforms: Vec::new(),
            franchises: Vec::new(),
            collections: Vec::new(),
            creator_ids: Vec::new(),
            publisher_ids: Vec::new(),
            websites: Vec::new(),
        }
    }

    pub fn with_artworks(mut self, artworks: Vec<String>) -> Self {
        self.artworks = artworks;
        self
    }

    pub fn with_cover(mut self, cover: Option<String>) -> Self {
        if let Some(cover) = cover {
            self.cover = cover;
        }
        self
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_franchises(mut self, franchises: Vec<String>) -> Self {
        self.franchises = franchises;
        self
    }

    pub fn with_collections(mut self, collections: Vec<String>) -> Self {
        self.collections = collections;
        self
    }

    /// Split involved companies into developer and publisher ids.
    /// A company can be both; credits without a company are skipped.
    pub fn with_involved_companies(mut self, involved: &[InvolvedCompany]) -> Self {
        self.creator_ids = involved
            .iter()
            .filter(|c| c.developer)
            .filter_map(|c| c.company)
            .collect();
        self.publisher_ids = involved
            .iter()
            .filter(|c| c.publisher)
            .filter_map(|c| c.company)
            .collect();
        self
    }

    pub fn with_websites(mut self, websites: Vec<WebsiteRecord>) -> Self {
        self.websites = websites;
        self
    }

    /// Every company id referenced by a developer or publisher credit.
    pub fn company_ids(&self) -> Vec<IgdbId> {
        unique(self.creator_ids.iter().chain(&self.publisher_ids).copied())
    }

    /// Every website type id that needs a label.
    pub fn website_type_ids(&self) -> Vec<IgdbId> {
        unique(
            self.websites
                .iter()
                .filter(|w| w.url.is_some())
                .filter_map(|w| w.website_type),
        )
    }

    /// Resolve company and website type ids and freeze the record.
    ///
    /// Ids missing from either table are dropped.
    pub fn build(
        self,
        companies: &HashMap<IgdbId, String>,
        website_types: &HashMap<IgdbId, String>,
    ) -> DetailRecord {
        let resolve = |ids: &[IgdbId]| -> Vec<String> {
            ids.iter()
                .filter_map(|id| companies.get(id).cloned())
                .collect()
        };
        let creators = resolve(&self.creator_ids);
        let publishers = resolve(&self.publisher_ids);

        let mut links: Vec<Link> = self
            .websites
            .into_iter()
            .filter_map(|website| {
                let label = website_types.get(&website.website_type?)?;
                Some(Link {
                    name: label.clone(),
                    url: website.url?,
                })
            })
            .collect();
        links.push(Link {
            name: IGDB_LINK_NAME.to_string(),
            url: self.page_url,
        });

        let mut series = self.franchises;
        series.extend(self.collections);

        DetailRecord {
            id: self.id,
            name: self.name,
            artworks: self.artworks,
            cover: self.cover,
            description: self.description,
            release_date: self.release_date,
            critics_score: self.critics_score,
            community_score: self.community_score,
            genres: self.genres,
            platforms: self.platforms,
            series,
            creators,
            publishers,
            links,
        }
    }
}

fn score(rating: Option<f64>) -> u8 {
    rating
        .map(|r| r.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

fn unique(ids: impl Iterator<Item = IgdbId>) -> Vec<IgdbId> {
    let mut seen = Vec::new();
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
