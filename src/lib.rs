//! TickBuzz - a movie ticket browsing and seat booking service.
//!
//! Consumer-facing catalog/booking surface plus a parallel administrative
//! CRUD interface, backed by seeded fixtures rather than a database.
//!
//! # Architecture
//!
//! ```text
//!                       ┌─────────────────────┐
//!                       │     HTTP (axum)     │
//!                       │  /api     /admin    │
//!                       └──────────┬──────────┘
//!                                  │
//!        ┌──────────────┬──────────┴────┬───────────────┐
//!        ▼              ▼               ▼               ▼
//! ┌────────────┐ ┌────────────┐ ┌──────────────┐ ┌────────────┐
//! │  Catalog   │ │    Seat    │ │   Booking    │ │ Confirmed  │
//! │  (memory   │ │ inventory  │ │  sessions    │ │  bookings  │
//! │  or file)  │ │ (fixture)  │ │  (reducer)   │ │ (registry) │
//! └────────────┘ └────────────┘ └──────────────┘ └────────────┘
//! ```
//!
//! # Key behaviors
//!
//! - Each client session owns an independent [`booking::BookingState`],
//!   mutated only through the [`booking::BookingAction`] vocabulary; the
//!   running total is recomputed on every seat mutation and always equals the
//!   sum of the selected seats' prices.
//! - Invalid transitions (picking a booked seat, deselecting an unselected
//!   seat) are reported as typed rejections with state untouched, never
//!   faults.
//! - Confirmation performs a conditional write against the shared seat
//!   inventory: if any selected seat was taken since selection, the
//!   confirmation fails with a conflict naming the contested seats.
//! - The admin surface validates payloads at the boundary and distinguishes
//!   not-found from success on update and delete.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod inventory;
pub mod reducer;
pub mod server;
pub mod testing;
pub mod types;

pub use booking::{BookingAction, BookingReducer, BookingState, Sessions, Transition};
pub use catalog::CatalogStore;
pub use config::Config;
pub use error::AppError;
pub use inventory::SeatInventory;
pub use server::{build_router, build_state, AppState};
