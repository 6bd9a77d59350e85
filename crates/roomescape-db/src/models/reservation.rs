//! Reservation database model

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// A reservation row joined with its time slot and theme
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRowModel {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time_id: i64,
    pub start_at: NaiveTime,
    pub theme_id: i64,
    pub theme_name: String,
    pub theme_description: String,
    pub theme_thumbnail: String,
}
