//! Seed fixtures embedded at compile time.
//!
//! The JSON under `data/` is the catalog every fresh deployment starts from:
//! six movies, three theaters, their showtimes, and the per-showtime seat
//! layouts.

use crate::types::{Movie, Showtime, Theater};

/// Raw movies fixture.
pub const MOVIES: &str = include_str!("../../data/movies.json");

/// Raw theaters fixture.
pub const THEATERS: &str = include_str!("../../data/theaters.json");

/// Raw showtimes fixture.
pub const SHOWTIMES: &str = include_str!("../../data/showtimes.json");

/// Raw seat layouts fixture (showtime id → seat list).
pub const SEATS: &str = include_str!("../../data/seats.json");

/// Parses the seeded movie collection.
///
/// # Errors
///
/// Returns a deserialization error if the embedded fixture is malformed.
pub fn movies() -> Result<Vec<Movie>, serde_json::Error> {
    serde_json::from_str(MOVIES)
}

/// Parses the seeded theater collection.
///
/// # Errors
///
/// Returns a deserialization error if the embedded fixture is malformed.
pub fn theaters() -> Result<Vec<Theater>, serde_json::Error> {
    serde_json::from_str(THEATERS)
}

/// Parses the seeded showtime collection.
///
/// # Errors
///
/// Returns a deserialization error if the embedded fixture is malformed.
pub fn showtimes() -> Result<Vec<Showtime>, serde_json::Error> {
    serde_json::from_str(SHOWTIMES)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::TheaterStatus;

    #[test]
    fn seeded_movies_parse() {
        let movies = movies().unwrap();
        assert_eq!(movies.len(), 6);
        assert!(movies.iter().any(|movie| movie.title == "Inception"));
    }

    #[test]
    fn seeded_theaters_parse() {
        let theaters = theaters().unwrap();
        assert_eq!(theaters.len(), 3);
        assert_eq!(theaters[2].status, TheaterStatus::Maintenance);
        assert_eq!(theaters[0].operating_hours.len(), 7);
    }

    #[test]
    fn seeded_showtimes_reference_seeded_movies_and_theaters() {
        let movies = movies().unwrap();
        let theaters = theaters().unwrap();
        for showtime in showtimes().unwrap() {
            assert!(movies.iter().any(|movie| movie.id == showtime.movie_id));
            assert!(theaters.iter().any(|theater| theater.id == showtime.theater_id));
        }
    }
}
