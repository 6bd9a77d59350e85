//! Reservation time entity - a reusable time-of-day slot

use chrono::NaiveTime;

use crate::value_objects::TimeId;

/// Format used for `startAt` on the wire
pub const START_AT_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationTime {
    pub id: TimeId,
    pub start_at: NaiveTime,
}

impl ReservationTime {
    pub fn new(id: TimeId, start_at: NaiveTime) -> Self {
        Self { id, start_at }
    }

    /// `HH:MM` rendering of the start time
    pub fn start_at_display(&self) -> String {
        self.start_at.format(START_AT_FORMAT).to_string()
    }
}

/// A time slot annotated with whether a (date, theme) pair already holds it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableTime {
    pub time: ReservationTime,
    pub already_booked: bool,
}
