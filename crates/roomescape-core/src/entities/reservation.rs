//! Reservation entity - a booking of a theme at a date and time slot

use chrono::NaiveDate;

use crate::entities::{ReservationTime, Theme};
use crate::value_objects::{ReservationId, ThemeId, TimeId};

/// Format used for reservation dates on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reservation with its time slot and theme resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub name: String,
    pub date: NaiveDate,
    pub time: ReservationTime,
    pub theme: Theme,
}

impl Reservation {
    /// The (date, time, theme) triple that must be unique across reservations
    pub fn slot(&self) -> (NaiveDate, TimeId, ThemeId) {
        (self.date, self.time.id, self.theme.id)
    }
}

/// Validated booking ready to be stored
///
/// The time and theme have already been resolved, so the store only needs
/// to enforce slot uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub name: String,
    pub date: NaiveDate,
    pub time: ReservationTime,
    pub theme: Theme,
}

impl NewReservation {
    pub fn slot(&self) -> (NaiveDate, TimeId, ThemeId) {
        (self.date, self.time.id, self.theme.id)
    }

    pub fn into_reservation(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            theme: self.theme,
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
