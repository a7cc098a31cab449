//! Game metadata service backed by the IGDB catalog.
//!
//! Three operations are exposed through [`services::GameMetadataService`]:
//! free-text option search, detail enrichment for a single game, and
//! similar-game recommendations. [`api`] wraps them in an axum router.

pub mod api;
pub mod config;
pub mod error;
pub mod igdb;
pub mod models;
pub mod services;
pub mod text;
