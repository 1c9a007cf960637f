//! Router configuration.
//!
//! Builds the complete Axum router: health checks, the public catalog and
//! booking surface under `/api`, and the authenticated admin surface under
//! `/admin`.

use super::health::{health_check, readiness_check};
use super::state::AppState;
use crate::api::{admin, movies, seats, sessions, theaters};
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Build the complete Axum router.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Catalog queries
        .route("/movies", get(movies::list_movies))
        .route("/movies/:id", get(movies::get_movie))
        .route("/movies/:id/showtimes", get(movies::list_showtimes))
        .route("/theaters", get(theaters::list_theaters))
        .route("/theaters/:id", get(theaters::get_theater))
        // Seat inventory
        .route("/showtimes/:id/seats", get(seats::get_seats))
        // Booking sessions
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/:id", get(sessions::get_session))
        .route("/sessions/:id/movie", post(sessions::select_movie))
        .route("/sessions/:id/showtime", post(sessions::select_showtime))
        .route("/sessions/:id/seats", post(sessions::select_seat))
        .route("/sessions/:id/seats", delete(sessions::clear_seats))
        .route("/sessions/:id/seats/:seat_id", delete(sessions::deselect_seat))
        .route("/sessions/:id/confirm", post(sessions::confirm_booking))
        .route("/sessions/:id/reset", post(sessions::reset_booking))
        // Confirmations
        .route("/bookings/:id", get(sessions::get_booking));

    let admin_routes = Router::new()
        .route("/login", post(admin::login))
        .route("/movies", get(admin::list_movies))
        .route("/movies", post(admin::create_movie))
        .route("/movies/:id", put(admin::update_movie))
        .route("/movies/:id", delete(admin::delete_movie))
        .route("/theaters", get(admin::list_theaters))
        .route("/theaters", post(admin::create_theater))
        .route("/theaters/:id", put(admin::update_theater))
        .route("/theaters/:id", delete(admin::delete_theater));

    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .nest("/api", api_routes)
        .nest("/admin", admin_routes)
        .with_state(state)
}
