//! HTTP server for the booking service.
//!
//! Provides the Axum router, shared application state, health endpoints, and
//! graceful shutdown handling.

pub mod health;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::{build_state, AppState};

/// Resolves when the process receives ctrl-c, triggering graceful shutdown.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to install ctrl-c handler");
    }
    tracing::info!("shutdown signal received");
}
