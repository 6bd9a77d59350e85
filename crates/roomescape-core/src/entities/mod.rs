//! Domain entities - core business objects

mod member;
mod reservation;
mod reservation_time;
mod theme;

pub use member::{LoginMember, Member, NewMember};
pub use reservation::{parse_date, NewReservation, Reservation, DATE_FORMAT};
pub use reservation_time::{AvailableTime, ReservationTime, START_AT_FORMAT};
pub use theme::{NewTheme, Theme};
