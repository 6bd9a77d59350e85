//! # roomescape-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    parse_date, AvailableTime, LoginMember, Member, NewMember, NewReservation, NewTheme,
    Reservation, ReservationTime, Theme, DATE_FORMAT, START_AT_FORMAT,
};
pub use error::DomainError;
pub use traits::{
    MemberRepository, RepoResult, ReservationRepository, ReservationTimeRepository,
    ThemeRepository,
};
pub use value_objects::{
    IdParseError, MemberId, ReservationId, Role, RoleParseError, ThemeId, TimeId,
};
