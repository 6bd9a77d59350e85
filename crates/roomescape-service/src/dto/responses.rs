//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names. Ids are plain JSON numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use roomescape_core::value_objects::{MemberId, ReservationId, Role, ThemeId, TimeId};

// ============================================================================
// Member Responses
// ============================================================================

/// Member profile, also returned by `GET /login/check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

// ============================================================================
// Theme Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeResponse {
    pub id: ThemeId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

// ============================================================================
// Reservation Time Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationTimeResponse {
    pub id: TimeId,
    /// `HH:MM`
    pub start_at: String,
}

/// A time slot flagged with whether the requested (date, theme) holds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeResponse {
    pub time: ReservationTimeResponse,
    pub already_booked: bool,
}

// ============================================================================
// Reservation Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: ReservationTimeResponse,
    pub theme: ThemeResponse,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
