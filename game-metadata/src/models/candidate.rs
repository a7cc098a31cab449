use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::igdb::types::GameSummary;

/// Lightweight search/recommendation result.
///
/// Wire format: `{ "id": "26226", "name": "Celeste (2018)" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Candidate {
    /// Upstream numeric id, stringified.
    pub id: String,
    /// Title, with ` (YYYY)` appended when a release date is known.
    pub name: String,
}

impl Candidate {
    pub fn new(id: u64, name: &str, first_release_date: Option<i64>) -> Self {
        Self {
            id: id.to_string(),
            name: display_name(name, first_release_date),
        }
    }
}

impl Candidate {
    /// `None` when the upstream row has no title.
    pub fn from_summary(game: &GameSummary) -> Option<Self> {
        let name = game.name.as_deref()?;
        Some(Self::new(game.id, name, game.first_release_date))
    }
}

/// Append the UTC release year of a unix timestamp to `name`.
pub fn display_name(name: &str, first_release_date: Option<i64>) -> String {
    match first_release_date
        .filter(|ts| *ts != 0)
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
    {
        Some(released) => format!("{name} ({})", released.year()),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_is_appended() {
        let candidate = Candidate::new(26226, "Celeste", Some(1516665600));
        assert_eq!(candidate.id, "26226");
        assert_eq!(candidate.name, "Celeste (2018)");
    }

    #[test]
    fn test_year_uses_utc() {
        // 2017-12-31T23:30:00Z
        assert_eq!(display_name("Late", Some(1514763000)), "Late (2017)");
    }

    #[test]
    fn test_missing_release_date_keeps_name() {
        let candidate = Candidate::new(1, "Unreleased", None);
        assert_eq!(candidate.name, "Unreleased");
    }

    #[test]
    fn test_zero_timestamp_means_unknown() {
        assert_eq!(display_name("Placeholder", Some(0)), "Placeholder");
    }

    #[test]
    fn test_untitled_summary_is_skipped() {
        let untitled = GameSummary {
            id: 99,
            name: None,
            first_release_date: Some(1516665600),
        };
        assert_eq!(Candidate::from_summary(&untitled), None);

        let titled = GameSummary {
            id: 26226,
            name: Some("Celeste".to_string()),
            first_release_date: Some(1516665600),
        };
        assert_eq!(
            Candidate::from_summary(&titled),
            Some(Candidate::new(26226, "Celeste", Some(1516665600)))
        );
    }

    #[test]
    fn test_serializes_id_as_string() {
        let json = serde_json::to_value(Candidate::new(7, "Doom", None)).expect("serialize");
        assert_eq!(json, serde_json::json!({"id": "7", "name": "Doom"}));
    }
}
