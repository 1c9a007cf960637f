//! Action vocabulary for the booking state machine.

use crate::types::{BookingId, Movie, Seat, SeatId, Showtime, Theater};
use serde::{Deserialize, Serialize};

/// All inputs the booking state machine accepts.
///
/// Transitions are synchronous and total; the reducer reports acceptance or
/// rejection through [`super::Transition`] rather than failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BookingAction {
    /// Pick a movie. Clears any downstream showtime, theater, and seats.
    SelectMovie(Movie),

    /// Pick a showtime and its hosting theater. Clears any selected seats.
    SelectShowtime {
        /// The showing being booked
        showtime: Showtime,
        /// The theater hosting it
        theater: Theater,
    },

    /// Add a seat to the selection and recompute the total.
    SelectSeat(Seat),

    /// Remove a seat from the selection and recompute the total.
    DeselectSeat(SeatId),

    /// Empty the seat selection.
    ClearSeats,

    /// Stamp the confirmed booking identifier.
    ///
    /// Requiring at least one selected seat is the caller's job; the state
    /// machine stamps unconditionally and leaves the selection untouched.
    ConfirmBooking(BookingId),

    /// Return to the empty initial state.
    ResetBooking,
}
