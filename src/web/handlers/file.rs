//! File handlers.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};

use super::AppState;
use crate::file::{CreateFile, FileId, FileView, ListQuery};
use crate::web::dto::ApiResponse;
use crate::web::error::ApiError;
use crate::web::middleware::SessionToken;

/// POST /files - Create a folder, document or image.
pub async fn create_file(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    body: Result<Json<CreateFile>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<FileView>>), ApiError> {
    let Json(request) = match body {
        Ok(body) => body,
        Err(e) => {
            // Identity is reported before anything about the body
            state.files.authenticate(token.as_deref()).await?;
            tracing::debug!("Rejected create body: {}", e);
            return Err(ApiError::bad_request(e.body_text()));
        }
    };

    let file = state.files.create(token.as_deref(), request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(file))))
}

/// GET /files/:id - Show one of the caller's entries.
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FileView>>, ApiError> {
    let file = state
        .files
        .show(token.as_deref(), &FileId::from(id))
        .await?;
    Ok(Json(ApiResponse::new(file)))
}

/// GET /files - List the caller's entries.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<FileView>>>, ApiError> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(e) => {
            state.files.authenticate(token.as_deref()).await?;
            return Err(ApiError::bad_request(e.body_text()));
        }
    };

    let files = state.files.list(token.as_deref(), &query).await?;
    Ok(Json(ApiResponse::new(files)))
}

/// PUT /files/:id/publish - Make an entry public.
pub async fn publish_file(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FileView>>, ApiError> {
    let file = state
        .files
        .publish(token.as_deref(), &FileId::from(id))
        .await?;
    Ok(Json(ApiResponse::new(file)))
}

/// PUT /files/:id/unpublish - Make an entry private.
pub async fn unpublish_file(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FileView>>, ApiError> {
    let file = state
        .files
        .unpublish(token.as_deref(), &FileId::from(id))
        .await?;
    Ok(Json(ApiResponse::new(file)))
}

/// GET /files/:id/data - Raw bytes of a file.
///
/// Public files need no token.
pub async fn get_file_data(
    State(state): State<Arc<AppState>>,
    token: SessionToken,
    Path(id): Path<String>,
) -> Result<Response<Body>, ApiError> {
    let content = state
        .files
        .content(token.as_deref(), &FileId::from(id))
        .await?;

    let response = Response::builder()
        .header(header::CONTENT_TYPE, content.mime_type)
        .header(header::CONTENT_LENGTH, content.bytes.len())
        .body(Body::from(content.bytes))
        .map_err(|e| {
            tracing::error!("Failed to build response: {}", e);
            ApiError::internal("Failed to build response")
        })?;

    Ok(response)
}
