//! Booking session endpoints.
//!
//! One session per client, created with `POST /api/sessions` and driven
//! through the linear flow: select a movie, select a showtime, pick seats,
//! confirm. Every mutating endpoint returns the reported transition together
//! with the state after the dispatch, so the client can decide whether to
//! surface a rejection (the original UI silently ignored them).
//!
//! Confirmation is the one cross-session write: the selected seats are
//! conditionally flipped to booked in the shared inventory, and the request
//! fails with a conflict if any of them were taken since selection.

use crate::booking::{BookingAction, BookingState, SessionId, Transition};
use crate::confirmation::{BookingRecord, ConfirmedSelection};
use crate::error::AppError;
use crate::server::state::AppState;
use crate::types::{BookingId, Money, MovieId, Seat, SeatId, SeatStatus, ShowtimeId};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

/// Response for `POST /api/sessions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    /// The new session's identifier
    pub session_id: SessionId,
}

/// Response for every mutating session endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    /// What the state machine reported
    pub outcome: Transition,
    /// The selection after the dispatch
    pub state: BookingState,
}

/// Request to select a movie.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMovieRequest {
    /// Movie to select
    pub movie_id: MovieId,
}

/// Request to select a showtime (the theater is derived from it).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectShowtimeRequest {
    /// Showtime to select
    pub showtime_id: ShowtimeId,
}

/// Request to select a seat.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSeatRequest {
    /// Seat to add to the selection
    pub seat_id: SeatId,
}

fn parse_session(raw: &str) -> Result<SessionId, AppError> {
    SessionId::parse(raw).ok_or_else(|| AppError::not_found("Session", raw))
}

fn dispatch(
    state: &AppState,
    session: SessionId,
    action: BookingAction,
) -> Result<ActionResponse, AppError> {
    let (outcome, booking) = state
        .sessions
        .dispatch(session, action)
        .ok_or_else(|| AppError::not_found("Session", session))?;
    Ok(ActionResponse {
        outcome,
        state: booking,
    })
}

/// Start a new booking session with the empty selection.
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create();
    tracing::debug!(%session_id, "booking session created");
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// Get a session's current selection.
pub async fn get_session(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookingState>, AppError> {
    let session = parse_session(&id)?;
    state
        .sessions
        .snapshot(session)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Session", session))
}

/// Select a movie, clearing any downstream showtime and seats.
pub async fn select_movie(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<SelectMovieRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let session = parse_session(&id)?;
    let movie = state
        .catalog
        .get_movie(&request.movie_id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie", &request.movie_id))?;
    dispatch(&state, session, BookingAction::SelectMovie(movie)).map(Json)
}

/// Select a showtime and its hosting theater, clearing any picked seats.
pub async fn select_showtime(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<SelectShowtimeRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let session = parse_session(&id)?;
    let showtime = state
        .catalog
        .get_showtime(&request.showtime_id)
        .await?
        .ok_or_else(|| AppError::not_found("Showtime", &request.showtime_id))?;
    let theater = state
        .catalog
        .get_theater(&showtime.theater_id)
        .await?
        .ok_or_else(|| AppError::not_found("Theater", &showtime.theater_id))?;
    dispatch(&state, session, BookingAction::SelectShowtime { showtime, theater }).map(Json)
}

/// Add a seat to the selection.
///
/// The seat record comes from the shared inventory snapshot for the session's
/// selected showtime; picking a booked seat is reported as a rejected
/// transition, not a fault.
pub async fn select_seat(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<SelectSeatRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let session = parse_session(&id)?;
    let booking = state
        .sessions
        .snapshot(session)
        .ok_or_else(|| AppError::not_found("Session", session))?;
    let showtime = booking
        .selected_showtime
        .ok_or_else(|| AppError::validation("no showtime selected"))?;
    let seats = state
        .inventory
        .seats_for_showtime(&showtime.id)
        .ok_or_else(|| AppError::not_found("Showtime", &showtime.id))?;
    let seat = seats
        .into_iter()
        .find(|seat| seat.id == request.seat_id)
        .ok_or_else(|| AppError::not_found("Seat", &request.seat_id))?;
    dispatch(&state, session, BookingAction::SelectSeat(seat)).map(Json)
}

/// Remove a seat from the selection.
pub async fn deselect_seat(
    Path((id, seat_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<ActionResponse>, AppError> {
    let session = parse_session(&id)?;
    dispatch(&state, session, BookingAction::DeselectSeat(SeatId::new(seat_id))).map(Json)
}

/// Empty the seat selection.
pub async fn clear_seats(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ActionResponse>, AppError> {
    let session = parse_session(&id)?;
    dispatch(&state, session, BookingAction::ClearSeats).map(Json)
}

/// Reset the session to the empty initial state.
pub async fn reset_booking(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ActionResponse>, AppError> {
    let session = parse_session(&id)?;
    dispatch(&state, session, BookingAction::ResetBooking).map(Json)
}

/// Confirm the selection: conditionally book the seats, mint the
/// confirmation id, and record the booking.
///
/// Requiring at least one selected seat is enforced here, at the boundary,
/// not inside the state machine.
pub async fn confirm_booking(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<BookingRecord>), AppError> {
    let session = parse_session(&id)?;
    let booking = state
        .sessions
        .snapshot(session)
        .ok_or_else(|| AppError::not_found("Session", session))?;

    if booking.booking_id.is_some() {
        return Err(AppError::conflict("booking already confirmed"));
    }
    let movie = booking
        .selected_movie
        .ok_or_else(|| AppError::validation("no movie selected"))?;
    let (showtime, theater) = booking
        .selected_showtime
        .zip(booking.selected_theater)
        .ok_or_else(|| AppError::validation("no showtime selected"))?;
    if booking.selected_seats.is_empty() {
        return Err(AppError::validation("no seats selected"));
    }

    // The conditional write: fails the confirmation if any selected seat's
    // status changed since selection, before anything is recorded.
    let seat_ids: Vec<SeatId> = booking.selected_seats.iter().map(|seat| seat.id.clone()).collect();
    state.inventory.book_seats(&showtime.id, &seat_ids)?;

    let seats: Vec<Seat> = booking
        .selected_seats
        .into_iter()
        .map(|seat| Seat {
            status: SeatStatus::Booked,
            ..seat
        })
        .collect();
    let total_price = Money::total_of(seats.iter().map(|seat| seat.price));

    let record = state.bookings.confirm(ConfirmedSelection {
        movie,
        theater,
        showtime,
        seats,
        total_price,
    });
    tracing::info!(booking_id = %record.id, %session, seats = record.seats.len(), "booking confirmed");

    // Stamp the id on the session; the selection itself is left untouched.
    state
        .sessions
        .dispatch(session, BookingAction::ConfirmBooking(record.id.clone()))
        .ok_or_else(|| AppError::not_found("Session", session))?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Look up a confirmed booking by its confirmation id.
pub async fn get_booking(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookingRecord>, AppError> {
    let booking_id = BookingId::new(id);
    state
        .bookings
        .get(&booking_id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Booking", booking_id))
}
