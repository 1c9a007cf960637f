//! Flat-file catalog backend.
//!
//! Movies and theaters live as pretty-printed JSON files under a data
//! directory; every mutation is a whole-file read-modify-write, the way the
//! original's file-backed routes rewrite `data/movies.json`. Mutations within
//! this process are serialized by a lock; cross-process writers are out of
//! scope, as in the original.

use super::store::{next_id, CatalogError, CatalogStore};
use crate::types::{
    Movie, MovieId, MovieUpdate, NewMovie, NewTheater, Showtime, ShowtimeId, Theater, TheaterId,
    TheaterUpdate,
};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Catalog persisted as flat JSON files.
pub struct JsonFileCatalog {
    movies_path: PathBuf,
    theaters_path: PathBuf,
    showtimes: Vec<Showtime>,
    write_lock: Mutex<()>,
}

impl JsonFileCatalog {
    /// Opens (and seeds, if necessary) a catalog under the given directory.
    ///
    /// Missing collection files are created from the embedded fixtures so a
    /// fresh deployment starts with the same catalog as the memory backend.
    ///
    /// # Errors
    ///
    /// Fails if the directory or seed files cannot be created, or if the
    /// embedded fixtures are malformed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;

        let movies_path = dir.join("movies.json");
        let theaters_path = dir.join("theaters.json");
        if !tokio::fs::try_exists(&movies_path).await? {
            write_collection(&movies_path, &super::seed::movies()?).await?;
        }
        if !tokio::fs::try_exists(&theaters_path).await? {
            write_collection(&theaters_path, &super::seed::theaters()?).await?;
        }

        Ok(Self {
            movies_path,
            theaters_path,
            showtimes: super::seed::showtimes()?,
            write_lock: Mutex::new(()),
        })
    }
}

async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), CatalogError> {
    let bytes = serde_json::to_vec_pretty(records)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

#[async_trait]
impl CatalogStore for JsonFileCatalog {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        read_collection(&self.movies_path).await
    }

    async fn get_movie(&self, id: &MovieId) -> Result<Option<Movie>, CatalogError> {
        let movies: Vec<Movie> = read_collection(&self.movies_path).await?;
        Ok(movies.into_iter().find(|movie| &movie.id == id))
    }

    async fn create_movie(&self, new: NewMovie) -> Result<Movie, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut movies: Vec<Movie> = read_collection(&self.movies_path).await?;
        let id = MovieId::new(next_id(movies.iter().map(|movie| movie.id.as_str())));
        let movie = new.into_movie(id);
        movies.push(movie.clone());
        write_collection(&self.movies_path, &movies).await?;
        Ok(movie)
    }

    async fn update_movie(
        &self,
        id: &MovieId,
        update: MovieUpdate,
    ) -> Result<Option<Movie>, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut movies: Vec<Movie> = read_collection(&self.movies_path).await?;
        let Some(movie) = movies.iter_mut().find(|movie| &movie.id == id) else {
            return Ok(None);
        };
        update.apply(movie);
        let updated = movie.clone();
        write_collection(&self.movies_path, &movies).await?;
        Ok(Some(updated))
    }

    async fn delete_movie(&self, id: &MovieId) -> Result<bool, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut movies: Vec<Movie> = read_collection(&self.movies_path).await?;
        let before = movies.len();
        movies.retain(|movie| &movie.id != id);
        if movies.len() == before {
            return Ok(false);
        }
        write_collection(&self.movies_path, &movies).await?;
        Ok(true)
    }

    async fn list_theaters(&self) -> Result<Vec<Theater>, CatalogError> {
        read_collection(&self.theaters_path).await
    }

    async fn get_theater(&self, id: &TheaterId) -> Result<Option<Theater>, CatalogError> {
        let theaters: Vec<Theater> = read_collection(&self.theaters_path).await?;
        Ok(theaters.into_iter().find(|theater| &theater.id == id))
    }

    async fn create_theater(&self, new: NewTheater) -> Result<Theater, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut theaters: Vec<Theater> = read_collection(&self.theaters_path).await?;
        let id = TheaterId::new(next_id(theaters.iter().map(|theater| theater.id.as_str())));
        let theater = new.into_theater(id);
        theaters.push(theater.clone());
        write_collection(&self.theaters_path, &theaters).await?;
        Ok(theater)
    }

    async fn update_theater(
        &self,
        id: &TheaterId,
        update: TheaterUpdate,
    ) -> Result<Option<Theater>, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut theaters: Vec<Theater> = read_collection(&self.theaters_path).await?;
        let Some(theater) = theaters.iter_mut().find(|theater| &theater.id == id) else {
            return Ok(None);
        };
        update.apply(theater);
        let updated = theater.clone();
        write_collection(&self.theaters_path, &theaters).await?;
        Ok(Some(updated))
    }

    async fn delete_theater(&self, id: &TheaterId) -> Result<bool, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut theaters: Vec<Theater> = read_collection(&self.theaters_path).await?;
        let before = theaters.len();
        theaters.retain(|theater| &theater.id != id);
        if theaters.len() == before {
            return Ok(false);
        }
        write_collection(&self.theaters_path, &theaters).await?;
        Ok(true)
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
