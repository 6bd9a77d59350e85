//! Value objects - immutable types that represent domain concepts

mod ids;
mod role;

pub use ids::{IdParseError, MemberId, ReservationId, ThemeId, TimeId};
pub use role::{Role, RoleParseError};
