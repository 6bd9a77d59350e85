//! Reservation time database model

use chrono::NaiveTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ReservationTimeModel {
    pub id: i64,
    pub start_at: NaiveTime,
}
