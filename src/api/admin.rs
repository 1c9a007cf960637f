//! Administrative CRUD endpoints for the catalog.
//!
//! Every route except `POST /admin/login` requires a valid admin bearer
//! token. Payloads pass the validation boundary before they reach the store;
//! a malformed record is rejected with a structured reason and never
//! partially applied.

use crate::auth::{AdminSession, LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::server::state::AppState;
use crate::types::{
    Movie, MovieId, MovieUpdate, NewMovie, NewTheater, Theater, TheaterId, TheaterUpdate,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

/// Response for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always true; a missing id is a 404 instead
    pub success: bool,
}

/// Exchange the configured credentials for an admin bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state.admin.login(&request.email, &request.password)?;
    Ok(Json(LoginResponse { token }))
}

/// List the full movie collection.
pub async fn list_movies(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.catalog.list_movies().await?))
}

/// Create a movie; the store assigns the next identifier.
pub async fn create_movie(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(new): Json<NewMovie>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    new.validate()?;
    let movie = state.catalog.create_movie(new).await?;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Merge an update into a movie.
pub async fn update_movie(
    _session: AdminSession,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(update): Json<MovieUpdate>,
) -> Result<Json<Movie>, AppError> {
    update.validate()?;
    let movie_id = MovieId::new(id);
    state
        .catalog
        .update_movie(&movie_id, update)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Movie", movie_id))
}

/// Delete a movie.
pub async fn delete_movie(
    _session: AdminSession,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let movie_id = MovieId::new(id);
    if state.catalog.delete_movie(&movie_id).await? {
        tracing::info!(%movie_id, "movie deleted");
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(AppError::not_found("Movie", movie_id))
    }
}

/// List the full theater collection.
pub async fn list_theaters(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Theater>>, AppError> {
    Ok(Json(state.catalog.list_theaters().await?))
}

/// Create a theater; the store assigns the next identifier.
pub async fn create_theater(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(new): Json<NewTheater>,
) -> Result<(StatusCode, Json<Theater>), AppError> {
    new.validate()?;
    let theater = state.catalog.create_theater(new).await?;
    tracing::info!(theater_id = %theater.id, name = %theater.name, "theater created");
    Ok((StatusCode::CREATED, Json(theater)))
}

/// Merge an update into a theater.
pub async fn update_theater(
    _session: AdminSession,
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(update): Json<TheaterUpdate>,
) -> Result<Json<Theater>, AppError> {
    update.validate()?;
    let theater_id = TheaterId::new(id);
    state
        .catalog
        .update_theater(&theater_id, update)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Theater", theater_id))
}

/// Delete a theater.
pub async fn delete_theater(
    _session: AdminSession,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let theater_id = TheaterId::new(id);
    if state.catalog.delete_theater(&theater_id).await? {
        tracing::info!(%theater_id, "theater deleted");
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(AppError::not_found("Theater", theater_id))
    }
}
