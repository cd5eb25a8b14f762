//! Status and statistics handlers.

use std::sync::Arc;

use axum::{extract::State, Json};

use super::AppState;
use crate::file::FileRepository;
use crate::web::dto::{ApiResponse, StatsResponse, StatusResponse};
use crate::web::error::ApiError;

/// GET /status - Report whether the record store is reachable.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatusResponse>> {
    let db = state.db.is_alive().await;
    Json(ApiResponse::new(StatusResponse { db }))
}

/// GET /stats - Count file entries.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StatsResponse>>, ApiError> {
    let files = FileRepository::new(state.db.pool()).count().await?;
    Ok(Json(ApiResponse::new(StatsResponse { files })))
}
