//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use serde::Deserialize;
use validator::Validate;

use roomescape_core::value_objects::{ThemeId, TimeId};

// ============================================================================
// Auth / Member Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Member signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 4, max = 72, message = "Password must be 4-72 characters"))]
    pub password: String,
}

// ============================================================================
// Reservation Requests
// ============================================================================

/// Create reservation request
///
/// `date` stays a string here so a malformed value surfaces as an
/// `InvalidDate` domain error after the time and theme are checked.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    pub time_id: TimeId,

    pub theme_id: ThemeId,

    /// Display name; defaults to the logged-in member's name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Theme Requests
// ============================================================================

/// Create theme request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThemeRequest {
    #[validate(length(min = 1, max = 255, message = "Theme name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 255, message = "Thumbnail must be 1-255 characters"))]
    pub thumbnail: String,
}

// ============================================================================
// Reservation Time Requests
// ============================================================================

/// Create reservation time request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationTimeRequest {
    /// `HH:MM`
    #[validate(length(min = 1, message = "startAt is required"))]
    pub start_at: String,
}

/// Query for `GET /times/available`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimesQuery {
    pub date: String,
    pub theme_id: ThemeId,
}
