//! Database models - SQLx-compatible structs for PostgreSQL tables

mod member;
mod reservation;
mod reservation_time;
mod theme;

pub use member::MemberModel;
pub use reservation::ReservationRowModel;
pub use reservation_time::ReservationTimeModel;
pub use theme::ThemeModel;
