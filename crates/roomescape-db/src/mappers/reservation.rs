//! Joined reservation row -> entity mapper

use roomescape_core::entities::{Reservation, ReservationTime, Theme};
use roomescape_core::value_objects::{ReservationId, ThemeId, TimeId};

use crate::models::ReservationRowModel;

impl From<ReservationRowModel> for Reservation {
    fn from(row: ReservationRowModel) -> Self {
        Reservation {
            id: ReservationId::new(row.id),
            name: row.name,
            date: row.date,
            time: ReservationTime {
                id: TimeId::new(row.time_id),
                start_at: row.start_at,
            },
            theme: Theme {
                id: ThemeId::new(row.theme_id),
                name: row.theme_name,
                description: row.theme_description,
                thumbnail: row.theme_thumbnail,
            },
        }
    }
}
