//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates
//! repository calls for one resource.

pub mod auth;
pub mod context;
pub mod error;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use reservation::ReservationService;
pub use reservation_time::ReservationTimeService;
pub use theme::{ThemeService, POPULAR_LIMIT, POPULAR_WINDOW_DAYS};
