//! HTTP API endpoints.
//!
//! Thin adapters between the wire and the domain modules: the public catalog
//! and booking-session surface under `/api`, and the authenticated admin CRUD
//! surface under `/admin`.

pub mod admin;
pub mod movies;
pub mod seats;
pub mod sessions;
pub mod theaters;
