//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{MemberId, ReservationId, ThemeId, TimeId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Theme not found: {0}")]
    ThemeNotFound(ThemeId),

    #[error("Reservation time not found: {0}")]
    ReservationTimeNotFound(TimeId),

    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid {resource} id={id}")]
    InvalidReference { resource: &'static str, id: i64 },

    #[error("Reservation already exists for this date, time and theme")]
    DuplicateReservation,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reservation time already exists: {0}")]
    DuplicateReservationTime(String),

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("{0} is still referenced by reservations")]
    StillReferenced(&'static str),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Reference to a time slot that does not exist
    pub fn invalid_time(id: TimeId) -> Self {
        Self::InvalidReference {
            resource: "time",
            id: id.into_inner(),
        }
    }

    /// Reference to a theme that does not exist
    pub fn invalid_theme(id: ThemeId) -> Self {
        Self::InvalidReference {
            resource: "theme",
            id: id.into_inner(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::ThemeNotFound(_) => "UNKNOWN_THEME",
            Self::ReservationTimeNotFound(_) => "UNKNOWN_RESERVATION_TIME",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",

            // Validation
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidReference { .. } => "INVALID_REFERENCE",
            Self::DuplicateReservation => "DUPLICATE_RESERVATION",

            // Conflict
            Self::DuplicateReservationTime(_) => "DUPLICATE_RESERVATION_TIME",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::StillReferenced(_) => "STILL_REFERENCED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ReservationNotFound(_)
                | Self::ThemeNotFound(_)
                | Self::ReservationTimeNotFound(_)
                | Self::MemberNotFound(_)
        )
    }

    /// Check if this error is caused by bad client input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidReference { .. }
                | Self::DuplicateReservation
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateReservationTime(_) | Self::EmailAlreadyExists | Self::StillReferenced(_)
        )
    }
}
