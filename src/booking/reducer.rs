//! Reducer for the booking state machine.
//!
//! Every transition in the table below is synchronous and total: malformed
//! input (selecting a booked seat, deselecting a seat that was never
//! selected) leaves state unchanged and is reported as a rejection, never a
//! fault.
//!
//! | Action | Precondition | Effect |
//! |---|---|---|
//! | `SelectMovie` | none | set movie; clear showtime, theater, seats |
//! | `SelectShowtime` | none | set showtime+theater; clear seats |
//! | `SelectSeat` | seat not booked, not already selected | append, recompute total |
//! | `DeselectSeat` | seat in the selection | remove, recompute total |
//! | `ClearSeats` | none | empty selection, total zero |
//! | `ConfirmBooking` | caller-enforced | stamp id; selection untouched |
//! | `ResetBooking` | none | initial state |

use super::actions::BookingAction;
use super::state::BookingState;
use crate::reducer::Reducer;
use crate::types::{Money, Seat, SeatId, SeatStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a transition was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "code", content = "seatId")]
pub enum RejectReason {
    /// The seat is permanently taken in the inventory snapshot.
    SeatAlreadyBooked(SeatId),
    /// The seat is already part of this selection.
    SeatAlreadySelected(SeatId),
    /// Deselect named a seat that is not part of this selection.
    SeatNotSelected(SeatId),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeatAlreadyBooked(id) => write!(f, "seat {id} is already booked"),
            Self::SeatAlreadySelected(id) => write!(f, "seat {id} is already selected"),
            Self::SeatNotSelected(id) => write!(f, "seat {id} is not selected"),
        }
    }
}

/// What a single dispatch reports back.
///
/// A rejected transition guarantees the state was left exactly as it was.
/// Callers that want the original silent-ignore behavior simply discard the
/// value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "reason")]
pub enum Transition {
    /// The action was applied to the state.
    Applied,
    /// The action was ignored; the reason says why.
    Rejected(RejectReason),
}

impl Transition {
    /// True if the action was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Reducer for one session's booking selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct BookingReducer;

impl BookingReducer {
    /// Creates a new `BookingReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn validate_select_seat(state: &BookingState, seat: &Seat) -> Result<(), RejectReason> {
        if seat.status == SeatStatus::Booked {
            return Err(RejectReason::SeatAlreadyBooked(seat.id.clone()));
        }
        if state.has_seat(&seat.id) {
            return Err(RejectReason::SeatAlreadySelected(seat.id.clone()));
        }
        Ok(())
    }

    fn recompute_total(state: &mut BookingState) {
        state.total_price = Money::total_of(state.selected_seats.iter().map(|seat| seat.price));
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Outcome = Transition;

    fn reduce(&self, state: &mut BookingState, action: BookingAction) -> Transition {
        match action {
            BookingAction::SelectMovie(movie) => {
                state.selected_movie = Some(movie);
                state.selected_showtime = None;
                state.selected_theater = None;
                state.selected_seats.clear();
                state.total_price = Money::ZERO;
                Transition::Applied
            }

            BookingAction::SelectShowtime { showtime, theater } => {
                state.selected_showtime = Some(showtime);
                state.selected_theater = Some(theater);
                state.selected_seats.clear();
                state.total_price = Money::ZERO;
                Transition::Applied
            }

            BookingAction::SelectSeat(seat) => {
                if let Err(reason) = Self::validate_select_seat(state, &seat) {
                    return Transition::Rejected(reason);
                }
                state.selected_seats.push(Seat {
                    status: SeatStatus::Selected,
                    ..seat
                });
                Self::recompute_total(state);
                Transition::Applied
            }

            BookingAction::DeselectSeat(seat_id) => {
                if !state.has_seat(&seat_id) {
                    return Transition::Rejected(RejectReason::SeatNotSelected(seat_id));
                }
                state.selected_seats.retain(|seat| seat.id != seat_id);
                Self::recompute_total(state);
                Transition::Applied
            }

            BookingAction::ClearSeats => {
                state.selected_seats.clear();
                state.total_price = Money::ZERO;
                Transition::Applied
            }

            BookingAction::ConfirmBooking(id) => {
                // Stamps only; no implicit clear of the selection.
                state.booking_id = Some(id);
                Transition::Applied
            }

            BookingAction::ResetBooking => {
                *state = BookingState::new();
                Transition::Applied
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, ReducerTest};
    use crate::types::BookingId;

    #[test]
    fn select_movie_clears_downstream_selection() {
        let mut populated = BookingState::new();
        let reducer = BookingReducer::new();
        reducer.reduce(&mut populated, BookingAction::SelectMovie(fixtures::movie("1")));
        reducer.reduce(
            &mut populated,
            BookingAction::SelectShowtime {
                showtime: fixtures::showtime("1", "1", "1"),
                theater: fixtures::theater("1"),
            },
        );
        reducer.reduce(
            &mut populated,
            BookingAction::SelectSeat(fixtures::seat("A1", 250)),
        );

        ReducerTest::new(BookingReducer::new())
            .given_state(populated)
            .when_action(BookingAction::SelectMovie(fixtures::movie("2")))
            .then_state(|state| {
                assert_eq!(state.selected_movie.as_ref().unwrap().id.as_str(), "2");
                assert!(state.selected_showtime.is_none());
                assert!(state.selected_theater.is_none());
                assert!(state.selected_seats.is_empty());
                assert_eq!(state.total_price, Money::ZERO);
            })
            .then_outcome(|outcome| assert!(outcome.is_applied()))
            .run();
    }

    #[test]
    fn select_showtime_clears_seats_and_total() {
        let mut populated = BookingState::new();
        let reducer = BookingReducer::new();
        reducer.reduce(&mut populated, BookingAction::SelectMovie(fixtures::movie("1")));
        reducer.reduce(
            &mut populated,
            BookingAction::SelectShowtime {
                showtime: fixtures::showtime("1", "1", "1"),
                theater: fixtures::theater("1"),
            },
        );
        reducer.reduce(
            &mut populated,
            BookingAction::SelectSeat(fixtures::seat("A1", 250)),
        );

        ReducerTest::new(BookingReducer::new())
            .given_state(populated)
            .when_action(BookingAction::SelectShowtime {
                showtime: fixtures::showtime("2", "1", "2"),
                theater: fixtures::theater("2"),
            })
            .then_state(|state| {
                assert_eq!(state.selected_showtime.as_ref().unwrap().id.as_str(), "2");
                assert!(state.selected_seats.is_empty());
                assert_eq!(state.total_price, Money::ZERO);
            })
            .run();
    }

    #[test]
    fn selecting_seats_accumulates_total() {
        let mut state = BookingState::new();
        let reducer = BookingReducer::new();
        assert!(reducer
            .reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A1", 250)))
            .is_applied());
        assert!(reducer
            .reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A2", 250)))
            .is_applied());
        assert_eq!(state.total_price, Money::from_rupees(500));
        assert_eq!(
            state.seat_ids(),
            vec![crate::types::SeatId::from("A1"), crate::types::SeatId::from("A2")]
        );
        // Seats are carried with the client-local "selected" overlay.
        assert!(state
            .selected_seats
            .iter()
            .all(|seat| seat.status == SeatStatus::Selected));
    }

    #[test]
    fn selecting_a_booked_seat_is_rejected_and_leaves_state_unchanged() {
        let mut booked = fixtures::seat("A3", 250);
        booked.status = SeatStatus::Booked;

        ReducerTest::new(BookingReducer::new())
            .given_state(BookingState::new())
            .when_action(BookingAction::SelectSeat(booked))
            .then_state(|state| {
                assert!(state.selected_seats.is_empty());
                assert_eq!(state.total_price, Money::ZERO);
            })
            .then_outcome(|outcome| {
                assert_eq!(
                    outcome,
                    &Transition::Rejected(RejectReason::SeatAlreadyBooked(SeatId::from("A3")))
                );
            })
            .run();
    }

    #[test]
    fn selecting_the_same_seat_twice_is_rejected() {
        let mut state = BookingState::new();
        let reducer = BookingReducer::new();
        reducer.reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A1", 250)));
        let outcome =
            reducer.reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A1", 250)));
        assert_eq!(
            outcome,
            Transition::Rejected(RejectReason::SeatAlreadySelected(SeatId::from("A1")))
        );
        assert_eq!(state.selected_seats.len(), 1);
        assert_eq!(state.total_price, Money::from_rupees(250));
    }

    #[test]
    fn deselecting_recomputes_the_total() {
        let mut state = BookingState::new();
        let reducer = BookingReducer::new();
        reducer.reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A1", 250)));
        reducer.reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A2", 250)));
        let outcome = reducer.reduce(&mut state, BookingAction::DeselectSeat(SeatId::from("A1")));
        assert!(outcome.is_applied());
        assert_eq!(state.total_price, Money::from_rupees(250));
        assert_eq!(state.seat_ids(), vec![SeatId::from("A2")]);
    }

    #[test]
    fn deselecting_an_unselected_seat_is_a_reported_no_op() {
        ReducerTest::new(BookingReducer::new())
            .given_state(BookingState::new())
            .when_action(BookingAction::DeselectSeat(SeatId::from("Z9")))
            .then_state(|state| assert_eq!(state, &BookingState::new()))
            .then_outcome(|outcome| {
                assert_eq!(
                    outcome,
                    &Transition::Rejected(RejectReason::SeatNotSelected(SeatId::from("Z9")))
                );
            })
            .run();
    }

    #[test]
    fn clear_seats_empties_selection() {
        let mut state = BookingState::new();
        let reducer = BookingReducer::new();
        reducer.reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A1", 250)));
        reducer.reduce(&mut state, BookingAction::ClearSeats);
        assert!(state.selected_seats.is_empty());
        assert_eq!(state.total_price, Money::ZERO);
    }

    #[test]
    fn confirm_stamps_the_id_without_clearing_seats() {
        let mut state = BookingState::new();
        let reducer = BookingReducer::new();
        reducer.reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A2", 250)));
        reducer.reduce(
            &mut state,
            BookingAction::ConfirmBooking(BookingId::from("TB123")),
        );
        assert_eq!(state.booking_id, Some(BookingId::from("TB123")));
        assert_eq!(state.selected_seats.len(), 1);
        assert_eq!(state.total_price, Money::from_rupees(250));
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let mut state = BookingState::new();
        let reducer = BookingReducer::new();
        reducer.reduce(&mut state, BookingAction::SelectMovie(fixtures::movie("1")));
        reducer.reduce(&mut state, BookingAction::SelectSeat(fixtures::seat("A1", 250)));
        reducer.reduce(
            &mut state,
            BookingAction::ConfirmBooking(BookingId::from("TB123")),
        );
        reducer.reduce(&mut state, BookingAction::ResetBooking);
        assert_eq!(state, BookingState::new());
    }
}
