//! Public movie catalog endpoints.
//!
//! - `GET /api/movies` - full movie collection, unfiltered
//! - `GET /api/movies/:id` - one movie
//! - `GET /api/movies/:id/showtimes` - showtimes for a movie

use crate::error::AppError;
use crate::server::state::AppState;
use crate::types::{Movie, MovieId, Showtime};
use axum::{
    extract::{Path, State},
    Json,
};

/// List the full movie collection. Filtering happens client-side.
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.catalog.list_movies().await?))
}

/// Get one movie by id.
pub async fn get_movie(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Movie>, AppError> {
    let movie_id = MovieId::new(id);
    state
        .catalog
        .get_movie(&movie_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Movie", movie_id))
}

/// List the showtimes scheduled for a movie.
pub async fn list_showtimes(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Showtime>>, AppError> {
    let movie_id = MovieId::new(id);
    if state.catalog.get_movie(&movie_id).await?.is_none() {
        return Err(AppError::not_found("Movie", movie_id));
    }
    Ok(Json(state.catalog.list_showtimes_for_movie(&movie_id).await?))
}
