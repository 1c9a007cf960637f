//! Seat inventory endpoint.

use crate::error::AppError;
use crate::inventory::{SeatInventory, SeatRow};
use crate::server::state::AppState;
use crate::types::ShowtimeId;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

/// Seat map response: the showtime's seats partitioned by row.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapResponse {
    /// Showtime the snapshot belongs to
    pub showtime_id: ShowtimeId,
    /// Rows in ascending letter order, seats ascending by number
    pub rows: Vec<SeatRow>,
}

/// Get the seat snapshot for a showtime.
///
/// Unknown showtime ids follow the configured fallback policy; under the
/// reject policy they are a distinguishable not-found.
pub async fn get_seats(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let showtime_id = ShowtimeId::new(id);
    let seats = state
        .inventory
        .seats_for_showtime(&showtime_id)
        .ok_or_else(|| AppError::not_found("Showtime", &showtime_id))?;
    Ok(Json(SeatMapResponse {
        rows: SeatInventory::rows(&seats),
        showtime_id,
    }))
}
