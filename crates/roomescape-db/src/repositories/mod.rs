//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roomescape-core.

mod error;
mod member;
mod reservation;
mod reservation_time;
mod theme;

pub use member::PgMemberRepository;
pub use reservation::PgReservationRepository;
pub use reservation_time::PgReservationTimeRepository;
pub use theme::PgThemeRepository;
