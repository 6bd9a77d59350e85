//! Test fixtures and data generators
//!
//! Request bodies and response shapes as seen on the wire.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("member{suffix}"),
            email: format!("member{suffix}@example.com"),
            password: "password".to_string(),
        }
    }
}

/// Member response
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Create theme request
#[derive(Debug, Serialize)]
pub struct CreateThemeRequest {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl CreateThemeRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("theme {suffix}"),
            description: "An escape room".to_string(),
            thumbnail: "https://example.com/thumbnail.png".to_string(),
        }
    }
}

/// Theme response
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ThemeResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

/// Create reservation time request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeRequest {
    pub start_at: String,
}

impl CreateTimeRequest {
    pub fn at(start_at: &str) -> Self {
        Self {
            start_at: start_at.to_string(),
        }
    }
}

/// Reservation time response
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub id: i64,
    pub start_at: String,
}

/// Available time response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeResponse {
    pub time: TimeResponse,
    pub already_booked: bool,
}

/// Create reservation request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub date: String,
    pub time_id: i64,
    pub theme_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateReservationRequest {
    pub fn new(date: &str, time_id: i64, theme_id: i64) -> Self {
        Self {
            date: date.to_string(),
            time_id,
            theme_id,
            name: None,
        }
    }
}

/// Reservation response
#[derive(Debug, Deserialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: TimeResponse,
    pub theme: ThemeResponse,
}
