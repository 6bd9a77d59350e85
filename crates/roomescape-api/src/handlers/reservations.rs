//! Reservation handlers
//!
//! Endpoints for booking and cancelling reservations.

use axum::{extract::State, Json};
use roomescape_core::ReservationId;
use roomescape_service::dto::{CreateReservationRequest, ReservationResponse};
use roomescape_service::ReservationService;

use crate::extractors::{AuthMember, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all reservations
///
/// GET /reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.find_all_reservations().await?;
    Ok(Json(response))
}

/// Book a reservation for the logged-in member
///
/// POST /reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    AuthMember(member): AuthMember,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<Created<Json<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.create(request, &member).await?;
    Ok(Created(Json(response)))
}

/// Cancel a reservation
///
/// DELETE /reservations/{id}
pub async fn delete_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath<ReservationId>,
) -> ApiResult<NoContent> {
    let service = ReservationService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}

/// Reservations of the logged-in member
///
/// GET /reservations-mine
pub async fn my_reservations(
    State(state): State<AppState>,
    AuthMember(member): AuthMember,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.find_my_reservations(&member).await?;
    Ok(Json(response))
}
