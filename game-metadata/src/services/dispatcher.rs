use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::{MetadataError, Result};
use crate::igdb::types::IgdbId;
use crate::igdb::IgdbClient;
use crate::models::{Candidate, DetailRecord};

use super::info::InfoEnricher;
use super::options::OptionResolver;
use super::recommendations::RecommendationResolver;

/// The three operations the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Options,
    Info,
    Recommendations,
}

impl Operation {
    /// Query parameter the operation requires.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::Options => "name",
            Self::Info | Self::Recommendations => "id",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Options => "options",
            Self::Info => "info",
            Self::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "options" => Ok(Self::Options),
            "info" => Ok(Self::Info),
            "recommendations" => Ok(Self::Recommendations),
            _ => Err(MetadataError::NotFound(
                "Invalid endpoint! Use /[options|info|recommendations]".to_string(),
            )),
        }
    }
}

/// Result of a dispatched operation. Serializes as the bare payload.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum OperationOutput {
    Candidates(Vec<Candidate>),
    Detail(Box<DetailRecord>),
}

/// Entry point used by the HTTP layer: validates the operation and its
/// parameter, then delegates to the matching resolver.
#[derive(Clone)]
pub struct GameMetadataService {
    options: OptionResolver,
    info: InfoEnricher,
    recommendations: RecommendationResolver,
}

impl GameMetadataService {
    pub fn new(igdb: IgdbClient, search: SearchConfig) -> Self {
        Self {
            options: OptionResolver::new(igdb.clone(), search),
            info: InfoEnricher::new(igdb.clone()),
            recommendations: RecommendationResolver::new(igdb),
        }
    }

    pub async fn handle(
        &self,
        operation: &str,
        params: &HashMap<String, String>,
    ) -> Result<OperationOutput> {
        let operation: Operation = operation.parse()?;

        let param = params
            .get(operation.parameter())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                MetadataError::BadRequest(format!(
                    "Missing parameter for the {operation} endpoint"
                ))
            })?;

        tracing::debug!(%operation, %param, "Dispatching operation");

        match operation {
            Operation::Options => Ok(OperationOutput::Candidates(
                self.options.get_options(param).await,
            )),
            Operation::Info => {
                let id = parse_id(param)
                    .ok_or_else(|| MetadataError::NotFound(format!("Game {param} not found")))?;
                let record = self.info.get_info(id).await?;
                Ok(OperationOutput::Detail(Box::new(record)))
            }
            Operation::Recommendations => {
                let candidates = match parse_id(param) {
                    Some(id) => self.recommendations.get_recommendations(id).await,
                    None => Vec::new(),
                };
                Ok(OperationOutput::Candidates(candidates))
            }
        }
    }
}

/// Ids are embedded in query bodies, so only plain unsigned integers pass.
fn parse_id(raw: &str) -> Option<IgdbId> {
    raw.parse().ok()
}
