use std::sync::Arc;

use crate::config::SearchConfig;
use crate::igdb::types::GameSummary;
use crate::igdb::{Endpoint, IgdbClient, QueryBody};
use crate::models::Candidate;
use crate::text::{contains_folded, romanize_trailing_number};

pub(crate) const SUMMARY_FIELDS: &[&str] = &["id", "first_release_date", "name"];

/// Resolves a free-text name into candidate matches.
#[derive(Clone)]
pub struct OptionResolver {
    igdb: IgdbClient,
    search: Arc<SearchConfig>,
}

impl OptionResolver {
    pub fn new(igdb: IgdbClient, search: SearchConfig) -> Self {
        Self {
            igdb,
            search: Arc::new(search),
        }
    }

    /// Search IGDB for `name` and keep entries that contain every query word.
    ///
    /// When the name ends in a number, the search is repeated with that
    /// number written as a Roman numeral ("Final Fantasy 7" also finds
    /// "Final Fantasy VII") and the matches are appended. Each pass gets its
    /// own token. A failed search ends the chain and keeps what was found so
    /// far.
    pub async fn get_options(&self, name: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        let mut query = Some(name.to_string());
        let mut depth = 0;

        while let Some(current) = query.take() {
            let Some(found) = self.search_once(&current).await else {
                break;
            };
            candidates.extend(found);

            if depth < self.search.fallback_depth {
                query = romanize_trailing_number(&current, self.search.max_numeral);
                if let Some(rewritten) = &query {
                    tracing::debug!(from = %current, to = %rewritten, "Retrying search with Roman numeral");
                }
                depth += 1;
            }
        }

        candidates
    }

    async fn search_once(&self, name: &str) -> Option<Vec<Candidate>> {
        let token = self.igdb.access_token().await;
        let body = QueryBody::fields(SUMMARY_FIELDS).search(name);

        let games = match self
            .igdb
            .query::<GameSummary>(Endpoint::Games, &token, &body)
            .await
        {
            Ok(Some(games)) => games,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, query = %name, "Option search failed");
                return None;
            }
        };

        Some(
            games
                .iter()
                .filter(|game| {
                    game.name.as_deref().is_some_and(|title| {
                        !self.is_bundle(title) && contains_all_words(title, name)
                    })
                })
                .filter_map(Candidate::from_summary)
                .collect(),
        )
    }

    fn is_bundle(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.search
            .bad_words
            .iter()
            .any(|word| title.contains(word.as_str()))
    }
}

/// True when `title` contains each whitespace-separated word of `query`
/// (colons removed), ignoring case and accents.
pub fn contains_all_words(title: &str, query: &str) -> bool {
    query
        .replace(':', "")
        .split_whitespace()
        .all(|word| contains_folded(title, word))
}
