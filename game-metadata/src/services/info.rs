use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::{MetadataError, Result};
use crate::igdb::query::{id_filter, original_image_url};
use crate::igdb::types::{
    GameRecord, IgdbId, ImageRecord, InvolvedCompany, NamedRecord, WebsiteRecord, WebsiteType,
};
use crate::igdb::{AccessToken, Endpoint, IgdbClient, QueryBody};
use crate::models::{DetailRecord, DetailRecordBuilder};

const GAME_FIELDS: &[&str] = &[
    "aggregated_rating",
    "artworks",
    "collection",
    "collections",
    "cover",
    "franchise",
    "franchises",
    "genres",
    "platforms",
    "involved_companies",
    "first_release_date",
    "name",
    "rating",
    "summary",
    "url",
    "websites",
];
const IMAGE_FIELDS: &[&str] = &["url"];
const NAME_FIELDS: &[&str] = &["name"];
const INVOLVED_COMPANY_FIELDS: &[&str] = &["company", "developer", "publisher"];
const WEBSITE_FIELDS: &[&str] = &["type", "url"];
const WEBSITE_TYPE_FIELDS: &[&str] = &["type"];

/// Outcome of one best-effort sub-fetch.
///
/// `Degraded` means the query failed; the record keeps its seeded default
/// for that field.
#[derive(Debug)]
enum Fetched<T> {
    Resolved(T),
    Degraded,
}

impl<T> Fetched<T> {
    fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Degraded => None,
        }
    }
}

/// Builds a [`DetailRecord`] for one game by fanning out to the lookup
/// resources its primary record references.
#[derive(Clone)]
pub struct InfoEnricher {
    igdb: IgdbClient,
}

impl InfoEnricher {
    pub fn new(igdb: IgdbClient) -> Self {
        Self { igdb }
    }

    pub async fn get_info(&self, id: IgdbId) -> Result<DetailRecord> {
        let token = self.igdb.access_token().await;
        let game = self.fetch_game(id, &token).await?;

        let collections = with_singular(&game.collections, game.collection);
        let franchises = with_singular(&game.franchises, game.franchise);
        let cover_ids: Vec<IgdbId> = game.cover.into_iter().collect();

        let (
            artworks,
            cover,
            websites,
            involved,
            genres,
            platforms,
            collection_names,
            franchise_names,
        ) = tokio::join!(
            self.fetch::<ImageRecord>(Endpoint::Artworks, &token, IMAGE_FIELDS, &game.artworks),
            self.fetch::<ImageRecord>(Endpoint::Covers, &token, IMAGE_FIELDS, &cover_ids),
            self.fetch::<WebsiteRecord>(Endpoint::Websites, &token, WEBSITE_FIELDS, &game.websites),
            self.fetch::<InvolvedCompany>(
                Endpoint::InvolvedCompanies,
                &token,
                INVOLVED_COMPANY_FIELDS,
                &game.involved_companies,
            ),
            self.fetch::<NamedRecord>(Endpoint::Genres, &token, NAME_FIELDS, &game.genres),
            self.fetch::<NamedRecord>(Endpoint::Platforms, &token, NAME_FIELDS, &game.platforms),
            self.fetch::<NamedRecord>(Endpoint::Collections, &token, NAME_FIELDS, &collections),
            self.fetch::<NamedRecord>(Endpoint::Franchises, &token, NAME_FIELDS, &franchises),
        );

        let mut builder = DetailRecordBuilder::seed(&game);
        if let Some(artworks) = artworks.resolved() {
            builder = builder.with_artworks(image_urls(&artworks));
        }
        if let Some(cover) = cover.resolved() {
            builder = builder.with_cover(image_urls(&cover).into_iter().next());
        }
        if let Some(websites) = websites.resolved() {
            builder = builder.with_websites(websites);
        }
        if let Some(involved) = involved.resolved() {
            builder = builder.with_involved_companies(&involved);
        }
        if let Some(genres) = genres.resolved() {
            builder = builder.with_genres(names_in_order(&game.genres, genres));
        }
        if let Some(platforms) = platforms.resolved() {
            builder = builder.with_platforms(names_in_order(&game.platforms, platforms));
        }
        if let Some(names) = collection_names.resolved() {
            builder = builder.with_collections(names_in_order(&collections, names));
        }
        if let Some(names) = franchise_names.resolved() {
            builder = builder.with_franchises(names_in_order(&franchises, names));
        }

        let company_ids = builder.company_ids();
        let website_type_ids = builder.website_type_ids();
        let (companies, website_types) = tokio::join!(
            self.fetch::<NamedRecord>(Endpoint::Companies, &token, NAME_FIELDS, &company_ids),
            self.fetch::<WebsiteType>(
                Endpoint::WebsiteTypes,
                &token,
                WEBSITE_TYPE_FIELDS,
                &website_type_ids,
            ),
        );

        let companies: HashMap<IgdbId, String> = companies
            .resolved()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|company| Some((company.id, company.name?)))
            .collect();
        let website_types: HashMap<IgdbId, String> = website_types
            .resolved()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|website_type| Some((website_type.id, website_type.label?)))
            .collect();

        Ok(builder.build(&companies, &website_types))
    }

    async fn fetch_game(&self, id: IgdbId, token: &AccessToken) -> Result<GameRecord> {
        let body = QueryBody::fields(GAME_FIELDS).filter(format!("id = {id}"));
        let not_found = || MetadataError::NotFound(format!("Game {id} not found"));

        match self.igdb.query::<GameRecord>(Endpoint::Games, token, &body).await {
            Ok(Some(games)) => games.into_iter().next().ok_or_else(not_found),
            Ok(None) => Err(not_found()),
            Err(e) => {
                tracing::warn!(error = %e, game_id = id, "Primary game fetch failed");
                Err(not_found())
            }
        }
    }

    /// Query `endpoint` for `ids`. An empty id list resolves to nothing
    /// without touching the network.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        token: &AccessToken,
        fields: &[&str],
        ids: &[IgdbId],
    ) -> Fetched<Vec<T>> {
        let Some(filter) = id_filter(ids) else {
            return Fetched::Resolved(Vec::new());
        };

        let body = QueryBody::fields(fields).filter(format!("id = {filter}"));
        match self.igdb.query(endpoint, token, &body).await {
            Ok(Some(records)) => Fetched::Resolved(records),
            Ok(None) => Fetched::Degraded,
            Err(e) => {
                tracing::warn!(error = %e, %endpoint, "Sub-fetch failed, keeping default");
                Fetched::Degraded
            }
        }
    }
}

fn with_singular(ids: &[IgdbId], single: Option<IgdbId>) -> Vec<IgdbId> {
    let mut ids = ids.to_vec();
    if let Some(id) = single {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

fn image_urls(images: &[ImageRecord]) -> Vec<String> {
    images
        .iter()
        .filter_map(|image| image.url.as_deref())
        .map(original_image_url)
        .collect()
}

/// Names for `ids` in the order the game lists them; unresolved ids are dropped.
fn names_in_order(ids: &[IgdbId], records: Vec<NamedRecord>) -> Vec<String> {
    let mut names: HashMap<IgdbId, String> = records
        .into_iter()
        .filter_map(|record| Some((record.id, record.name?)))
        .collect();
    ids.iter().filter_map(|id| names.remove(id)).collect()
}
