//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use roomescape_core::entities::{
    AvailableTime, LoginMember, Member, Reservation, ReservationTime, Theme, DATE_FORMAT,
};

use super::responses::{
    AvailableTimeResponse, MemberResponse, ReservationResponse, ReservationTimeResponse,
    ThemeResponse,
};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

impl From<&LoginMember> for MemberResponse {
    fn from(member: &LoginMember) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
        }
    }
}

// ============================================================================
// Theme / Time Mappers
// ============================================================================

impl From<&Theme> for ThemeResponse {
    fn from(theme: &Theme) -> Self {
        Self {
            id: theme.id,
            name: theme.name.clone(),
            description: theme.description.clone(),
            thumbnail: theme.thumbnail.clone(),
        }
    }
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            id: theme.id,
            name: theme.name,
            description: theme.description,
            thumbnail: theme.thumbnail,
        }
    }
}

impl From<&ReservationTime> for ReservationTimeResponse {
    fn from(time: &ReservationTime) -> Self {
        Self {
            id: time.id,
            start_at: time.start_at_display(),
        }
    }
}

impl From<ReservationTime> for ReservationTimeResponse {
    fn from(time: ReservationTime) -> Self {
        Self::from(&time)
    }
}

impl From<AvailableTime> for AvailableTimeResponse {
    fn from(available: AvailableTime) -> Self {
        Self {
            time: ReservationTimeResponse::from(&available.time),
            already_booked: available.already_booked,
        }
    }
}

// ============================================================================
// Reservation Mappers
// ============================================================================

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            name: reservation.name.clone(),
            date: reservation.date.format(DATE_FORMAT).to_string(),
            time: ReservationTimeResponse::from(&reservation.time),
            theme: ThemeResponse::from(&reservation.theme),
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self::from(&reservation)
    }
}
