use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::handlers;
use super::response;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game Metadata API",
        version = "1.0.0",
        description = "Searches, enriches and recommends games from the IGDB catalog.",
    ),
    paths(
        handlers::health::health_check,
        handlers::games::run_operation,
    ),
    components(schemas(
        response::ErrorCode,
        response::ApiError,
        models::Candidate,
        models::DetailRecord,
        models::Link,
        services::OperationOutput,
        handlers::health::HealthData,
        handlers::health::IgdbStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "games", description = "Option search, detail enrichment and recommendations"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
