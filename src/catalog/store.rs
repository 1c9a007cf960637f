//! The catalog store contract shared by both backends.

use crate::types::{
    Movie, MovieId, MovieUpdate, NewMovie, NewTheater, Showtime, ShowtimeId, Theater, TheaterId,
    TheaterUpdate,
};
use async_trait::async_trait;

/// Failure inside a catalog backend.
///
/// "Not found" is not an error here: reads return `Option`, deletes return
/// whether a record was removed. This type covers the file backend's I/O and
/// serialization failures, which are reported to the caller without partial
/// mutation and never retried.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading or writing a collection file failed.
    #[error("catalog file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A collection file does not hold the expected JSON shape.
    #[error("catalog file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// List/create/read/update/delete over the catalog collections.
///
/// List operations return the full unfiltered collection; filtering and
/// searching happen client-side. Update and delete distinguish "not found"
/// from success.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All movies, unfiltered.
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError>;

    /// One movie by id.
    async fn get_movie(&self, id: &MovieId) -> Result<Option<Movie>, CatalogError>;

    /// Adds a movie, assigning the next identifier.
    async fn create_movie(&self, new: NewMovie) -> Result<Movie, CatalogError>;

    /// Merges an update into a movie; `None` if the id has no record.
    async fn update_movie(
        &self,
        id: &MovieId,
        update: MovieUpdate,
    ) -> Result<Option<Movie>, CatalogError>;

    /// Removes a movie; `false` if the id had no record.
    async fn delete_movie(&self, id: &MovieId) -> Result<bool, CatalogError>;

    /// All theaters, unfiltered.
    async fn list_theaters(&self) -> Result<Vec<Theater>, CatalogError>;

    /// One theater by id.
    async fn get_theater(&self, id: &TheaterId) -> Result<Option<Theater>, CatalogError>;

    /// Adds a theater, assigning the next identifier.
    async fn create_theater(&self, new: NewTheater) -> Result<Theater, CatalogError>;

    /// Merges an update into a theater; `None` if the id has no record.
    async fn update_theater(
        &self,
        id: &TheaterId,
        update: TheaterUpdate,
    ) -> Result<Option<Theater>, CatalogError>;

    /// Removes a theater; `false` if the id had no record.
    async fn delete_theater(&self, id: &TheaterId) -> Result<bool, CatalogError>;

    /// All showtimes for a movie.
    async fn list_showtimes_for_movie(
        &self,
        movie_id: &MovieId,
    ) -> Result<Vec<Showtime>, CatalogError>;

    /// One showtime by id.
    async fn get_showtime(&self, id: &ShowtimeId) -> Result<Option<Showtime>, CatalogError>;
}

/// Next identifier for a collection: highest numeric id plus one, rendered as
/// a string. Non-numeric ids are ignored, matching the original's
/// `parseInt`-and-max behavior.
#[must_use]
pub fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}
