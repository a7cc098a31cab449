use std::collections::HashMap;

use axum::extract::{Path, Query, State};

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;
use crate::services::OperationOutput;

/// `GET /api/v1/games/{operation}`
///
/// `options` takes `name`; `info` and `recommendations` take `id`.
#[utoipa::path(
    get,
    path = "/api/v1/games/{operation}",
    tag = "games",
    params(
        ("operation" = String, Path, description = "One of `options`, `info`, `recommendations`"),
        ("name" = Option<String>, Query, description = "Free-text title, required by `options`"),
        ("id" = Option<String>, Query, description = "IGDB game id, required by `info` and `recommendations`"),
    ),
    responses(
        (status = 200, description = "Candidate list or detail record", body = OperationOutput),
        (status = 400, description = "Required parameter missing"),
        (status = 404, description = "Unknown operation or game"),
    )
)]
pub async fn run_operation(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResponse<OperationOutput> {
    match state.games.handle(&operation, &params).await {
        Ok(output) => ApiResponse::success(output),
        Err(e) => e.into(),
    }
}
