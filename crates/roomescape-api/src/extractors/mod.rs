//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed parameters.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AdminMember, AuthMember, TOKEN_COOKIE};
pub use path::IdPath;
pub use query::QueryParams;
pub use validated::ValidatedJson;
