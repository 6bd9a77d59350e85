//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain objects.

mod member;
mod reservation;
mod reservation_time;
mod theme;

pub use member::role_to_str;
