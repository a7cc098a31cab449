use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::igdb::IgdbClient;
use crate::services::GameMetadataService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub games: GameMetadataService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let igdb = IgdbClient::new(&config.igdb)?;
        let games = GameMetadataService::new(igdb, config.search.clone());

        Ok(Self {
            config: Arc::new(config),
            games,
        })
    }
}
