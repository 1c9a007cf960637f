//! Public theater catalog endpoints.

use crate::error::AppError;
use crate::server::state::AppState;
use crate::types::{Theater, TheaterId};
use axum::{
    extract::{Path, State},
    Json,
};

/// List the full theater collection, unfiltered.
pub async fn list_theaters(State(state): State<AppState>) -> Result<Json<Vec<Theater>>, AppError> {
    Ok(Json(state.catalog.list_theaters().await?))
}

/// Get one theater by id.
pub async fn get_theater(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Theater>, AppError> {
    let theater_id = TheaterId::new(id);
    state
        .catalog
        .get_theater(&theater_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Theater", theater_id))
}
