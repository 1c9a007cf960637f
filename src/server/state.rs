//! Application state shared across HTTP handlers.

use crate::auth::AdminSessions;
use crate::booking::Sessions;
use crate::catalog::{seed, CatalogStore, JsonFileCatalog, MemoryCatalog};
use crate::clock::{Clock, SystemClock};
use crate::config::{Config, StorageBackend};
use crate::confirmation::BookingRegistry;
use crate::inventory::{SeatFallback, SeatInventory};
use crate::types::ShowtimeId;
use anyhow::Context;
use std::sync::Arc;

/// Everything the HTTP handlers need, cloned cheaply per request.
///
/// All of it is explicitly constructed in [`build_state`] and explicitly
/// passed through Axum's state extension; nothing here is a process-wide
/// singleton.
#[derive(Clone)]
pub struct AppState {
    /// Movie/theater/showtime collections
    pub catalog: Arc<dyn CatalogStore>,
    /// Shared per-showtime seat inventory
    pub inventory: Arc<SeatInventory>,
    /// Per-session booking selections
    pub sessions: Arc<Sessions>,
    /// Confirmed bookings, by confirmation id
    pub bookings: BookingRegistry,
    /// Admin login sessions
    pub admin: Arc<AdminSessions>,
}

/// Builds the application state described by the configuration.
///
/// # Errors
///
/// Fails when the seed fixtures are malformed or the file backend cannot be
/// opened.
pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    build_state_with_clock(config, clock).await
}

/// [`build_state`] with an injected clock, for deterministic tests.
///
/// # Errors
///
/// Same failure modes as [`build_state`].
pub async fn build_state_with_clock(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<AppState> {
    let catalog: Arc<dyn CatalogStore> = match config.storage.backend {
        StorageBackend::Memory => {
            Arc::new(MemoryCatalog::seeded().context("seeding in-memory catalog")?)
        }
        StorageBackend::File => Arc::new(
            JsonFileCatalog::open(config.storage.data_dir.clone())
                .await
                .context("opening file catalog")?,
        ),
    };

    let fallback = config
        .seating
        .fallback_showtime
        .as_deref()
        .map_or(SeatFallback::Reject, |id| {
            SeatFallback::Canned(ShowtimeId::from(id))
        });
    let inventory = SeatInventory::from_fixture(seed::SEATS, fallback)
        .context("loading seat inventory fixture")?;

    Ok(AppState {
        catalog,
        inventory: Arc::new(inventory),
        sessions: Arc::new(Sessions::new()),
        bookings: BookingRegistry::new(clock.clone()),
        admin: Arc::new(AdminSessions::new(config.admin.clone(), clock)),
    })
}
