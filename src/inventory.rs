//! Per-showtime seat inventory.
//!
//! Layouts are loaded from a static JSON fixture keyed by showtime id and
//! shared by every session. Lookups are read-only and idempotent; the single
//! write path is [`SeatInventory::book_seats`], the conditional check-and-set
//! performed when a booking is confirmed.

use crate::types::{Seat, SeatId, SeatStatus, ShowtimeId};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// What to serve when a showtime id has no layout in the fixture.
///
/// The default mirrors the observed behavior of the original data set: fall
/// back to the canned showtime `"1"` layout. The policy is explicit and
/// configurable rather than baked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeatFallback {
    /// Serve a copy of the named showtime's layout.
    Canned(ShowtimeId),
    /// Report the showtime as unknown.
    Reject,
}

impl Default for SeatFallback {
    fn default() -> Self {
        Self::Canned(ShowtimeId::from("1"))
    }
}

/// Seats no longer bookable at confirmation time.
///
/// Raised by the check-and-set in [`SeatInventory::book_seats`] when any
/// selected seat's status changed since selection (or names no seat at all).
/// Nothing is mutated when this is returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("seats no longer available: {}", unavailable.iter().map(SeatId::as_str).collect::<Vec<_>>().join(", "))]
pub struct SeatConflict {
    /// Seats that are booked or unknown in the current inventory snapshot.
    pub unavailable: Vec<SeatId>,
}

/// One row of the seat map, for the presentation grouping.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRow {
    /// Row letter
    pub row: String,
    /// Seats in the row, ascending by number
    pub seats: Vec<Seat>,
}

/// The shared seat inventory, one layout per showtime.
#[derive(Debug)]
pub struct SeatInventory {
    fixture: HashMap<ShowtimeId, Vec<Seat>>,
    /// Live layouts, materialized from the fixture on first touch so booked
    /// transitions under a fallback id never alias the canned layout.
    layouts: Mutex<HashMap<ShowtimeId, Vec<Seat>>>,
    fallback: SeatFallback,
}

impl SeatInventory {
    /// Loads the inventory from the JSON fixture (showtime id → seat list).
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the fixture is malformed.
    pub fn from_fixture(json: &str, fallback: SeatFallback) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<Seat>> = serde_json::from_str(json)?;
        let fixture = raw
            .into_iter()
            .map(|(id, seats)| (ShowtimeId::new(id), seats))
            .collect();
        Ok(Self {
            fixture,
            layouts: Mutex::new(HashMap::new()),
            fallback,
        })
    }

    /// Returns the seat snapshot for a showtime, applying the fallback policy
    /// for unknown ids. `None` only under [`SeatFallback::Reject`].
    ///
    /// Lookups are read-only: the same showtime id yields the same snapshot
    /// until a confirmation books seats out of it.
    #[must_use]
    pub fn seats_for_showtime(&self, id: &ShowtimeId) -> Option<Vec<Seat>> {
        let mut layouts = self.lock();
        if let Some(seats) = layouts.get(id) {
            return Some(seats.clone());
        }
        let template = self.template_for(id)?;
        layouts.insert(id.clone(), template.clone());
        Some(template)
    }

    /// Conditionally books the given seats for a showtime.
    ///
    /// Every seat must still be available in the shared inventory; on success
    /// all of them are flipped to booked atomically. If any seat is booked or
    /// unknown, nothing is mutated and the conflict names the contested
    /// seats.
    ///
    /// # Errors
    ///
    /// [`SeatConflict`] when any requested seat cannot be booked.
    pub fn book_seats(&self, id: &ShowtimeId, seats: &[SeatId]) -> Result<(), SeatConflict> {
        let mut layouts = self.lock();
        if !layouts.contains_key(id) {
            match self.template_for(id) {
                Some(template) => {
                    layouts.insert(id.clone(), template);
                }
                None => {
                    return Err(SeatConflict {
                        unavailable: seats.to_vec(),
                    });
                }
            }
        }

        // The lookup above inserts the layout when missing.
        let Some(layout) = layouts.get_mut(id) else {
            return Err(SeatConflict {
                unavailable: seats.to_vec(),
            });
        };

        let unavailable: Vec<SeatId> = seats
            .iter()
            .filter(|requested| {
                !layout
                    .iter()
                    .any(|seat| seat.id == **requested && seat.status == SeatStatus::Available)
            })
            .cloned()
            .collect();
        if !unavailable.is_empty() {
            return Err(SeatConflict { unavailable });
        }

        for seat in layout.iter_mut() {
            if seats.contains(&seat.id) {
                seat.status = SeatStatus::Booked;
            }
        }
        Ok(())
    }

    /// Partitions a seat snapshot by row: rows in ascending letter order,
    /// seats ascending by number within each row.
    #[must_use]
    pub fn rows(seats: &[Seat]) -> Vec<SeatRow> {
        let mut by_row: Vec<SeatRow> = Vec::new();
        for seat in seats {
            match by_row.iter_mut().find(|row| row.row == seat.row) {
                Some(row) => row.seats.push(seat.clone()),
                None => by_row.push(SeatRow {
                    row: seat.row.clone(),
                    seats: vec![seat.clone()],
                }),
            }
        }
        by_row.sort_by(|a, b| a.row.cmp(&b.row));
        for row in &mut by_row {
            row.seats.sort_by_key(|seat| seat.number);
        }
        by_row
    }

    /// Resolves the pristine layout for a showtime id, applying the fallback
    /// policy when the fixture has no entry.
    fn template_for(&self, id: &ShowtimeId) -> Option<Vec<Seat>> {
        if let Some(seats) = self.fixture.get(id) {
            return Some(seats.clone());
        }
        match &self.fallback {
            SeatFallback::Canned(canned) => self.fixture.get(canned).cloned(),
            SeatFallback::Reject => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ShowtimeId, Vec<Seat>>> {
        self.layouts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "1": [
            {"id": "A1", "row": "A", "number": 1, "status": "available", "price": 200},
            {"id": "A2", "row": "A", "number": 2, "status": "available", "price": 200},
            {"id": "B2", "row": "B", "number": 2, "status": "booked", "price": 250},
            {"id": "B1", "row": "B", "number": 1, "status": "available", "price": 250}
        ]
    }"#;

    fn inventory(fallback: SeatFallback) -> SeatInventory {
        SeatInventory::from_fixture(FIXTURE, fallback).unwrap()
    }

    #[test]
    fn lookup_is_idempotent() {
        let inventory = inventory(SeatFallback::default());
        let first = inventory.seats_for_showtime(&ShowtimeId::from("1")).unwrap();
        let second = inventory.seats_for_showtime(&ShowtimeId::from("1")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_showtime_falls_back_to_the_canned_layout() {
        let inventory = inventory(SeatFallback::Canned(ShowtimeId::from("1")));
        let seats = inventory.seats_for_showtime(&ShowtimeId::from("99")).unwrap();
        assert_eq!(seats.len(), 4);
    }

    #[test]
    fn reject_policy_reports_unknown_showtimes() {
        let inventory = inventory(SeatFallback::Reject);
        assert!(inventory.seats_for_showtime(&ShowtimeId::from("99")).is_none());
    }

    #[test]
    fn fallback_layouts_do_not_alias_the_canned_showtime() {
        let inventory = inventory(SeatFallback::Canned(ShowtimeId::from("1")));
        inventory
            .book_seats(&ShowtimeId::from("99"), &[SeatId::from("A1")])
            .unwrap();

        let canned = inventory.seats_for_showtime(&ShowtimeId::from("1")).unwrap();
        let a1 = canned.iter().find(|seat| seat.id.as_str() == "A1").unwrap();
        assert_eq!(a1.status, SeatStatus::Available);
    }

    #[test]
    fn booking_flips_available_seats() {
        let inventory = inventory(SeatFallback::default());
        let showtime = ShowtimeId::from("1");
        inventory
            .book_seats(&showtime, &[SeatId::from("A1"), SeatId::from("A2")])
            .unwrap();
        let seats = inventory.seats_for_showtime(&showtime).unwrap();
        assert!(seats
            .iter()
            .filter(|seat| seat.row == "A")
            .all(|seat| seat.status == SeatStatus::Booked));
    }

    #[test]
    fn booking_a_taken_seat_is_an_all_or_nothing_conflict() {
        let inventory = inventory(SeatFallback::default());
        let showtime = ShowtimeId::from("1");
        let conflict = inventory
            .book_seats(&showtime, &[SeatId::from("A1"), SeatId::from("B2")])
            .unwrap_err();
        assert_eq!(conflict.unavailable, vec![SeatId::from("B2")]);

        // A1 must be untouched by the failed attempt.
        let seats = inventory.seats_for_showtime(&showtime).unwrap();
        let a1 = seats.iter().find(|seat| seat.id.as_str() == "A1").unwrap();
        assert_eq!(a1.status, SeatStatus::Available);
    }

    #[test]
    fn booking_an_unknown_seat_is_a_conflict() {
        let inventory = inventory(SeatFallback::default());
        let conflict = inventory
            .book_seats(&ShowtimeId::from("1"), &[SeatId::from("Z9")])
            .unwrap_err();
        assert_eq!(conflict.unavailable, vec![SeatId::from("Z9")]);
    }

    #[test]
    fn rows_partition_and_order_the_snapshot() {
        let inventory = inventory(SeatFallback::default());
        let seats = inventory.seats_for_showtime(&ShowtimeId::from("1")).unwrap();
        let rows = SeatInventory::rows(&seats);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, "A");
        assert_eq!(rows[1].row, "B");
        let numbers: Vec<u32> = rows[1].seats.iter().map(|seat| seat.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
