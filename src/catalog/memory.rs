//! In-memory catalog backend.
//!
//! Mirrors the original's in-process route handlers: the collections live in
//! plain vectors seeded from the fixtures, and every mutation is lost on
//! restart.

use super::store::{next_id, CatalogError, CatalogStore};
use crate::types::{
    Movie, MovieId, MovieUpdate, NewMovie, NewTheater, Showtime, ShowtimeId, Theater, TheaterId,
    TheaterUpdate,
};
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

/// Catalog held entirely in process memory.
pub struct MemoryCatalog {
    movies: RwLock<Vec<Movie>>,
    theaters: RwLock<Vec<Theater>>,
    showtimes: Vec<Showtime>,
}

impl MemoryCatalog {
    /// Creates a catalog from explicit collections.
    #[must_use]
    pub const fn new(movies: Vec<Movie>, theaters: Vec<Theater>, showtimes: Vec<Showtime>) -> Self {
        Self {
            movies: RwLock::new(movies),
            theaters: RwLock::new(theaters),
            showtimes,
        }
    }

    /// Creates a catalog seeded from the embedded fixtures.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if an embedded fixture is malformed.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            super::seed::movies()?,
            super::seed::theaters()?,
            super::seed::showtimes()?,
        ))
    }

    fn read<T>(lock: &RwLock<Vec<T>>) -> std::sync::RwLockReadGuard<'_, Vec<T>> {
        lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write<T>(lock: &RwLock<Vec<T>>) -> std::sync::RwLockWriteGuard<'_, Vec<T>> {
        lock.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(Self::read(&self.movies).clone())
    }

    async fn get_movie(&self, id: &MovieId) -> Result<Option<Movie>, CatalogError> {
        Ok(Self::read(&self.movies).iter().find(|movie| &movie.id == id).cloned())
    }

    async fn create_movie(&self, new: NewMovie) -> Result<Movie, CatalogError> {
        let mut movies = Self::write(&self.movies);
        let id = MovieId::new(next_id(movies.iter().map(|movie| movie.id.as_str())));
        let movie = new.into_movie(id);
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update_movie(
        &self,
        id: &MovieId,
        update: MovieUpdate,
    ) -> Result<Option<Movie>, CatalogError> {
        let mut movies = Self::write(&self.movies);
        let Some(movie) = movies.iter_mut().find(|movie| &movie.id == id) else {
            return Ok(None);
        };
        update.apply(movie);
        Ok(Some(movie.clone()))
    }

    async fn delete_movie(&self, id: &MovieId) -> Result<bool, CatalogError> {
        let mut movies = Self::write(&self.movies);
        let before = movies.len();
        movies.retain(|movie| &movie.id != id);
        Ok(movies.len() < before)
    }

    async fn list_theaters(&self) -> Result<Vec<Theater>, CatalogError> {
        Ok(Self::read(&self.theaters).clone())
    }

    async fn get_theater(&self, id: &TheaterId) -> Result<Option<Theater>, CatalogError> {
        Ok(Self::read(&self.theaters)
            .iter()
            .find(|theater| &theater.id == id)
            .cloned())
    }

    async fn create_theater(&self, new: NewTheater) -> Result<Theater, CatalogError> {
        let mut theaters = Self::write(&self.theaters);
        let id = TheaterId::new(next_id(theaters.iter().map(|theater| theater.id.as_str())));
        let theater = new.into_theater(id);
        theaters.push(theater.clone());
        Ok(theater)
    }

    async fn update_theater(
        &self,
        id: &TheaterId,
        update: TheaterUpdate,
    ) -> Result<Option<Theater>, CatalogError> {
        let mut theaters = Self::write(&self.theaters);
        let Some(theater) = theaters.iter_mut().find(|theater| &theater.id == id) else {
            return Ok(None);
        };
        update.apply(theater);
        Ok(Some(theater.clone()))
    }

    async fn delete_theater(&self, id: &TheaterId) -> Result<bool, CatalogError> {
        let mut theaters = Self::write(&self.theaters);
        let before = theaters.len();
        theaters.retain(|theater| &theater.id != id);
        Ok(theaters.len() < before)
    }

    async fn list_showtimes_for_movie(
        &self,
        movie_id: &MovieId,
    ) -> Result<Vec<Showtime>, CatalogError> {
        Ok(self
            .showtimes
            .iter()
            .filter(|showtime| &showtime.movie_id == movie_id)
            .cloned()
            .collect())
    }

    async fn get_showtime(&self, id: &ShowtimeId) -> Result<Option<Showtime>, CatalogError> {
        Ok(self.showtimes.iter().find(|showtime| &showtime.id == id).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::seeded().unwrap()
    }

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            poster: String::new(),
            background_image: String::new(),
            genre: vec!["Drama".to_string()],
            duration: 100,
            language: "English".to_string(),
            rating: 7.0,
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            studio: String::new(),
        }
    }

    #[tokio::test]
    async fn created_movies_get_the_next_numeric_id() {
        let catalog = catalog();
        let movie = catalog.create_movie(new_movie("Dune")).await.unwrap();
        assert_eq!(movie.id, MovieId::from("7"));
        assert_eq!(catalog.list_movies().await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn deleting_a_missing_movie_reports_not_found_and_keeps_the_collection() {
        let catalog = catalog();
        let before = catalog.list_movies().await.unwrap().len();
        let deleted = catalog.delete_movie(&MovieId::from("42")).await.unwrap();
        assert!(!deleted);
        assert_eq!(catalog.list_movies().await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn updates_merge_into_the_existing_record() {
        let catalog = catalog();
        let update = MovieUpdate {
            rating: Some(9.9),
            ..MovieUpdate::default()
        };
        let updated = catalog
            .update_movie(&MovieId::from("3"), update)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Inception");
        assert!((updated.rating - 9.9).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn showtimes_are_filtered_by_movie() {
        let catalog = catalog();
        let shows = catalog
            .list_showtimes_for_movie(&MovieId::from("1"))
            .await
            .unwrap();
        assert!(!shows.is_empty());
        assert!(shows.iter().all(|show| show.movie_id == MovieId::from("1")));
    }
}
