//! Reservation time model -> entity mapper

use roomescape_core::entities::ReservationTime;
use roomescape_core::value_objects::TimeId;

use crate::models::ReservationTimeModel;

impl From<ReservationTimeModel> for ReservationTime {
    fn from(model: ReservationTimeModel) -> Self {
        ReservationTime {
            id: TimeId::new(model.id),
            start_at: model.start_at,
        }
    }
}
