//! In-progress booking selection state.

use crate::types::{BookingId, Money, Movie, Seat, SeatId, Showtime, Theater};
use serde::{Deserialize, Serialize};

/// The authoritative in-memory representation of one session's ticket
/// selection.
///
/// Holds at most one selected movie, one showtime+theater pair, an ordered,
/// id-unique set of selected seats, the derived total, and the confirmation
/// id once the booking is confirmed.
///
/// Invariant: `total_price` always equals the sum of the selected seats'
/// prices. It is recomputed on every seat mutation, never drifted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingState {
    /// Movie picked on the browsing page, if any
    pub selected_movie: Option<Movie>,
    /// Showtime picked on the detail page, if any
    pub selected_showtime: Option<Showtime>,
    /// Theater hosting the selected showtime, if any
    pub selected_theater: Option<Theater>,
    /// Seats picked so far, in selection order, unique by seat id
    pub selected_seats: Vec<Seat>,
    /// Sum of the selected seats' prices
    pub total_price: Money,
    /// Confirmation id, stamped by `ConfirmBooking`
    pub booking_id: Option<BookingId>,
}

impl BookingState {
    /// The empty selection a session starts with.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the given seat is already part of the selection.
    #[must_use]
    pub fn has_seat(&self, id: &SeatId) -> bool {
        self.selected_seats.iter().any(|seat| &seat.id == id)
    }

    /// Identifiers of the currently selected seats, in selection order.
    #[must_use]
    pub fn seat_ids(&self) -> Vec<SeatId> {
        self.selected_seats.iter().map(|seat| seat.id.clone()).collect()
    }
}
