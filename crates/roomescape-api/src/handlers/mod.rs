//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod health;
pub mod members;
pub mod reservations;
pub mod themes;
pub mod times;
