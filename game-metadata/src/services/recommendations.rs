use crate::igdb::query::id_filter;
use crate::igdb::types::{GameSummary, IgdbId, SimilarGames};
use crate::igdb::{Endpoint, IgdbClient, QueryBody};
use crate::models::Candidate;

use super::options::SUMMARY_FIELDS;

/// Turns IGDB's "similar games" for a title into candidates.
#[derive(Clone)]
pub struct RecommendationResolver {
    igdb: IgdbClient,
}

impl RecommendationResolver {
    pub fn new(igdb: IgdbClient) -> Self {
        Self { igdb }
    }

    /// Similar games for `id`, excluding version variants and sub-editions.
    /// Any upstream failure yields an empty list.
    pub async fn get_recommendations(&self, id: IgdbId) -> Vec<Candidate> {
        let token = self.igdb.access_token().await;

        let body = QueryBody::fields(&["similar_games"]).filter(format!("id = {id}"));
        let similar = match self
            .igdb
            .query::<SimilarGames>(Endpoint::Games, &token, &body)
            .await
        {
            Ok(Some(records)) => records,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, game_id = id, "Similar games lookup failed");
                return Vec::new();
            }
        };

        let Some(filter) = similar
            .first()
            .and_then(|record| id_filter(&record.similar_games))
        else {
            return Vec::new();
        };

        let body = QueryBody::fields(SUMMARY_FIELDS)
            .filter(format!("id = {filter}"))
            .filter("version_parent = null")
            .filter("parent_game = null");
        match self
            .igdb
            .query::<GameSummary>(Endpoint::Games, &token, &body)
            .await
        {
            Ok(Some(games)) => games.iter().filter_map(Candidate::from_summary).collect(),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, game_id = id, "Recommendation lookup failed");
                Vec::new()
            }
        }
    }
}
