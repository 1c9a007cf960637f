//! Domain types for the TickBuzz booking service.
//!
//! This module contains the identifiers, value objects, and entities shared by
//! the catalog, the seat inventory, and the booking state machine. Everything
//! here is plain owned data: `Clone` + `serde` round-trippable, with no I/O.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a raw string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id! {
    /// Unique identifier for a movie.
    ///
    /// Stable strings, numeric-looking in the seeded catalog (`"1"`, `"2"`, …).
    MovieId
}

string_id! {
    /// Unique identifier for a theater.
    TheaterId
}

string_id! {
    /// Unique identifier for a showtime.
    ShowtimeId
}

string_id! {
    /// Identifier for a seat, unique within one showtime (`"A1"` style).
    SeatId
}

string_id! {
    /// Opaque confirmation token minted when a booking is confirmed.
    ///
    /// Round-trips through a URL path segment (`/api/bookings/TB1754500000000`).
    BookingId
}

// ============================================================================
// Money (minor units to avoid floating point errors)
// ============================================================================

/// Represents money in paise to avoid floating-point arithmetic errors.
///
/// Amounts cross the wire (fixtures and JSON responses) as whole rupees, which
/// is the only granularity the catalog uses; internally the value is kept in
/// minor units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(u64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from paise.
    #[must_use]
    pub const fn from_paise(paise: u64) -> Self {
        Self(paise)
    }

    /// Creates a `Money` value from whole rupees, saturating on overflow.
    #[must_use]
    pub const fn from_rupees(rupees: u64) -> Self {
        Self(rupees.saturating_mul(100))
    }

    /// Returns the amount in paise.
    #[must_use]
    pub const fn paise(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole rupees (rounded down).
    #[must_use]
    pub const fn rupees(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts with overflow checking.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }

    /// Adds two amounts, saturating at the representable maximum.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Sums a sequence of amounts, saturating at the representable maximum.
    #[must_use]
    pub fn total_of<I: IntoIterator<Item = Self>>(amounts: I) -> Self {
        amounts
            .into_iter()
            .fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "₹{}", self.rupees())
        } else {
            write!(f, "₹{}.{:02}", self.rupees(), self.0 % 100)
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.rupees())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = u64::deserialize(deserializer)?;
        Ok(Self::from_rupees(rupees))
    }
}

// ============================================================================
// Catalog entities
// ============================================================================

/// A movie in the catalog.
///
/// Immutable from the booking flow's perspective; created, updated, and
/// deleted only through the administrative endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique movie identifier
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Poster image reference
    pub poster: String,
    /// Hero/background image reference
    pub background_image: String,
    /// Ordered genre tags
    pub genre: Vec<String>,
    /// Running time in minutes
    pub duration: u32,
    /// Spoken language
    pub language: String,
    /// Audience rating on a 0–10 scale
    pub rating: f32,
    /// Free-text description
    pub description: String,
    /// Theatrical release date
    pub release_date: NaiveDate,
    /// Producing studio
    pub studio: String,
}

/// Lifecycle status of a theater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TheaterStatus {
    /// Open for business
    Active,
    /// Temporarily closed
    Inactive,
    /// Closed for maintenance
    Maintenance,
}

/// A theater in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theater {
    /// Unique theater identifier
    pub id: TheaterId,
    /// Display name
    pub name: String,
    /// Street address
    pub location: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub zip_code: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Total seating capacity across screens
    pub capacity: u32,
    /// Number of screens
    pub screens: u32,
    /// Feature tags (IMAX, Dolby Atmos, …)
    pub features: Vec<String>,
    /// Weekday name → operating-hours string
    pub operating_hours: BTreeMap<String, String>,
    /// Facade/lobby image reference
    pub image: String,
    /// Current lifecycle status
    pub status: TheaterStatus,
}

/// A scheduled showing of a movie at a theater.
///
/// Many showtimes may exist per (movie, theater) pair; no overlap checking is
/// performed or assumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    /// Unique showtime identifier
    pub id: ShowtimeId,
    /// Movie being shown
    pub movie_id: MovieId,
    /// Theater hosting the showing
    pub theater_id: TheaterId,
    /// Calendar date of the showing
    pub date: NaiveDate,
    /// Start time of the showing
    pub time: NaiveTime,
    /// Base ticket price
    pub price: Money,
}

// ============================================================================
// Seats
// ============================================================================

/// Status of a single seat within a showtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Open for selection
    Available,
    /// Permanently taken
    Booked,
    /// Client-local overlay while part of an in-progress selection; never
    /// persisted in the inventory
    Selected,
}

/// A bookable seat within one showtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Identifier, unique within the showtime
    pub id: SeatId,
    /// Row letter
    pub row: String,
    /// Seat number, unique within its row
    pub number: u32,
    /// Current status
    pub status: SeatStatus,
    /// Price for this seat
    pub price: Money,
}

// ============================================================================
// Administrative payloads and validation
// ============================================================================

/// Validation failure for an administrative payload.
///
/// Rejected at the boundary with a reported reason; the store is never
/// touched with a malformed record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

fn require(condition: bool, reason: &str) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(reason))
    }
}

/// Payload for creating a movie. The store assigns the identifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    /// Display title
    pub title: String,
    /// Poster image reference
    #[serde(default)]
    pub poster: String,
    /// Hero/background image reference
    #[serde(default)]
    pub background_image: String,
    /// Ordered genre tags
    #[serde(default)]
    pub genre: Vec<String>,
    /// Running time in minutes
    pub duration: u32,
    /// Spoken language
    pub language: String,
    /// Audience rating on a 0–10 scale
    pub rating: f32,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Theatrical release date
    pub release_date: NaiveDate,
    /// Producing studio
    #[serde(default)]
    pub studio: String,
}

impl NewMovie {
    /// Checks the payload against the catalog's structural rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(!self.title.trim().is_empty(), "title must not be empty")?;
        require(self.duration > 0, "duration must be a positive number of minutes")?;
        require(
            (0.0..=10.0).contains(&self.rating),
            "rating must be between 0 and 10",
        )?;
        require(!self.language.trim().is_empty(), "language must not be empty")?;
        Ok(())
    }

    /// Builds the catalog record once an identifier has been assigned.
    #[must_use]
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            poster: self.poster,
            background_image: self.background_image,
            genre: self.genre,
            duration: self.duration,
            language: self.language,
            rating: self.rating,
            description: self.description,
            release_date: self.release_date,
            studio: self.studio,
        }
    }
}

/// Partial update for a movie; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    /// New title
    pub title: Option<String>,
    /// New poster reference
    pub poster: Option<String>,
    /// New background image reference
    pub background_image: Option<String>,
    /// New genre tags
    pub genre: Option<Vec<String>>,
    /// New duration in minutes
    pub duration: Option<u32>,
    /// New language
    pub language: Option<String>,
    /// New rating
    pub rating: Option<f32>,
    /// New description
    pub description: Option<String>,
    /// New release date
    pub release_date: Option<NaiveDate>,
    /// New studio
    pub studio: Option<String>,
}

impl MovieUpdate {
    /// Checks the provided fields against the catalog's structural rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            require(!title.trim().is_empty(), "title must not be empty")?;
        }
        if let Some(duration) = self.duration {
            require(duration > 0, "duration must be a positive number of minutes")?;
        }
        if let Some(rating) = self.rating {
            require((0.0..=10.0).contains(&rating), "rating must be between 0 and 10")?;
        }
        if let Some(language) = &self.language {
            require(!language.trim().is_empty(), "language must not be empty")?;
        }
        Ok(())
    }

    /// Merges the provided fields into an existing record.
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(background_image) = self.background_image {
            movie.background_image = background_image;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(language) = self.language {
            movie.language = language;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(description) = self.description {
            movie.description = description;
        }
        if let Some(release_date) = self.release_date {
            movie.release_date = release_date;
        }
        if let Some(studio) = self.studio {
            movie.studio = studio;
        }
    }
}

/// Payload for creating a theater. The store assigns the identifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTheater {
    /// Display name
    pub name: String,
    /// Street address
    pub location: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// State or province
    #[serde(default)]
    pub state: String,
    /// Postal code
    #[serde(default)]
    pub zip_code: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Total seating capacity
    pub capacity: u32,
    /// Number of screens
    pub screens: u32,
    /// Feature tags
    #[serde(default)]
    pub features: Vec<String>,
    /// Weekday name → operating-hours string
    #[serde(default)]
    pub operating_hours: BTreeMap<String, String>,
    /// Facade/lobby image reference
    #[serde(default)]
    pub image: String,
    /// Lifecycle status
    pub status: TheaterStatus,
}

impl NewTheater {
    /// Checks the payload against the catalog's structural rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(!self.name.trim().is_empty(), "name must not be empty")?;
        require(self.capacity > 0, "capacity must be a positive number")?;
        require(self.screens > 0, "screens must be a positive number")?;
        Ok(())
    }

    /// Builds the catalog record once an identifier has been assigned.
    #[must_use]
    pub fn into_theater(self, id: TheaterId) -> Theater {
        Theater {
            id,
            name: self.name,
            location: self.location,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            phone: self.phone,
            email: self.email,
            capacity: self.capacity,
            screens: self.screens,
            features: self.features,
            operating_hours: self.operating_hours,
            image: self.image,
            status: self.status,
        }
    }
}

/// Partial update for a theater; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheaterUpdate {
    /// New display name
    pub name: Option<String>,
    /// New street address
    pub location: Option<String>,
    /// New city
    pub city: Option<String>,
    /// New state
    pub state: Option<String>,
    /// New postal code
    pub zip_code: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New contact email
    pub email: Option<String>,
    /// New capacity
    pub capacity: Option<u32>,
    /// New screen count
    pub screens: Option<u32>,
    /// New feature tags
    pub features: Option<Vec<String>>,
    /// New operating hours
    pub operating_hours: Option<BTreeMap<String, String>>,
    /// New image reference
    pub image: Option<String>,
    /// New lifecycle status
    pub status: Option<TheaterStatus>,
}

impl TheaterUpdate {
    /// Checks the provided fields against the catalog's structural rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require(!name.trim().is_empty(), "name must not be empty")?;
        }
        if let Some(capacity) = self.capacity {
            require(capacity > 0, "capacity must be a positive number")?;
        }
        if let Some(screens) = self.screens {
            require(screens > 0, "screens must be a positive number")?;
        }
        Ok(())
    }

    /// Merges the provided fields into an existing record.
    pub fn apply(self, theater: &mut Theater) {
        if let Some(name) = self.name {
            theater.name = name;
        }
        if let Some(location) = self.location {
            theater.location = location;
        }
        if let Some(city) = self.city {
            theater.city = city;
        }
        if let Some(state) = self.state {
            theater.state = state;
        }
        if let Some(zip_code) = self.zip_code {
            theater.zip_code = zip_code;
        }
        if let Some(phone) = self.phone {
            theater.phone = phone;
        }
        if let Some(email) = self.email {
            theater.email = email;
        }
        if let Some(capacity) = self.capacity {
            theater.capacity = capacity;
        }
        if let Some(screens) = self.screens {
            theater.screens = screens;
        }
        if let Some(features) = self.features {
            theater.features = features;
        }
        if let Some(operating_hours) = self.operating_hours {
            theater.operating_hours = operating_hours;
        }
        if let Some(image) = self.image {
            theater.image = image;
        }
        if let Some(status) = self.status {
            theater.status = status;
        }
    }
}
