mod auth;
mod client;
pub mod query;
pub mod types;

pub use auth::{AccessToken, TokenProvider};
pub use client::{Endpoint, IgdbClient};
pub use query::QueryBody;
