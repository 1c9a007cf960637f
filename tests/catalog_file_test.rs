//! File-backed catalog: seeding and whole-file read-modify-write round trips.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use tickbuzz::catalog::{CatalogStore, JsonFileCatalog};
use tickbuzz::types::{MovieId, MovieUpdate, NewMovie, NewTheater, TheaterId, TheaterStatus};

fn new_movie(title: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        poster: String::new(),
        background_image: String::new(),
        genre: vec!["Drama".to_string()],
        duration: 100,
        language: "English".to_string(),
        rating: 7.5,
        description: String::new(),
        release_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        studio: "Studio".to_string(),
    }
}

#[tokio::test]
async fn a_fresh_directory_is_seeded_with_the_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonFileCatalog::open(dir.path()).await.unwrap();

    assert_eq!(catalog.list_movies().await.unwrap().len(), 6);
    assert_eq!(catalog.list_theaters().await.unwrap().len(), 3);
    assert!(dir.path().join("movies.json").exists());
    assert!(dir.path().join("theaters.json").exists());
}

#[tokio::test]
async fn created_movies_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let catalog = JsonFileCatalog::open(dir.path()).await.unwrap();
        let created = catalog.create_movie(new_movie("Dune: Part Two")).await.unwrap();
        assert_eq!(created.id, MovieId::from("7"));
    }

    let reopened = JsonFileCatalog::open(dir.path()).await.unwrap();
    let movies = reopened.list_movies().await.unwrap();
    assert_eq!(movies.len(), 7);
    assert!(movies.iter().any(|movie| movie.title == "Dune: Part Two"));
}

#[tokio::test]
async fn updates_rewrite_the_collection_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonFileCatalog::open(dir.path()).await.unwrap();

    let update = MovieUpdate {
        title: Some("Inception (Remastered)".to_string()),
        ..MovieUpdate::default()
    };
    let updated = catalog
        .update_movie(&MovieId::from("3"), update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Inception (Remastered)");

    let raw = std::fs::read_to_string(dir.path().join("movies.json")).unwrap();
    assert!(raw.contains("Inception (Remastered)"));
}

#[tokio::test]
async fn updating_a_missing_movie_is_a_distinguishable_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonFileCatalog::open(dir.path()).await.unwrap();

    let result = catalog
        .update_movie(&MovieId::from("42"), MovieUpdate::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn deleting_a_missing_movie_leaves_the_collection_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonFileCatalog::open(dir.path()).await.unwrap();

    assert!(!catalog.delete_movie(&MovieId::from("42")).await.unwrap());
    assert_eq!(catalog.list_movies().await.unwrap().len(), 6);

    assert!(catalog.delete_movie(&MovieId::from("6")).await.unwrap());
    assert_eq!(catalog.list_movies().await.unwrap().len(), 5);
}

#[tokio::test]
async fn theaters_round_trip_like_movies() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonFileCatalog::open(dir.path()).await.unwrap();

    let created = catalog
        .create_theater(NewTheater {
            name: "Riverside Screens".to_string(),
            location: "12 River Road".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10044".to_string(),
            phone: "(555) 456-7890".to_string(),
            email: "hello@riversidescreens.com".to_string(),
            capacity: 140,
            screens: 4,
            features: vec!["Snack Bar".to_string()],
            operating_hours: Default::default(),
            image: String::new(),
            status: TheaterStatus::Active,
        })
        .await
        .unwrap();
    assert_eq!(created.id, TheaterId::from("4"));

    let fetched = catalog.get_theater(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Riverside Screens");
}
