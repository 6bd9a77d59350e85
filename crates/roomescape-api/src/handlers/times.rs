//! Reservation time handlers

use axum::{extract::State, Json};
use roomescape_core::TimeId;
use roomescape_service::dto::{
    AvailableTimeResponse, AvailableTimesQuery, CreateReservationTimeRequest,
    ReservationTimeResponse,
};
use roomescape_service::ReservationTimeService;

use crate::extractors::{IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /times
pub async fn list_times(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReservationTimeResponse>>> {
    let service = ReservationTimeService::new(state.service_context());
    let response = service.find_all_times().await?;
    Ok(Json(response))
}

/// Time slots with their booking state for one date and theme
///
/// GET /times/available?date=YYYY-MM-DD&themeId=N
pub async fn available_times(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AvailableTimesQuery>,
) -> ApiResult<Json<Vec<AvailableTimeResponse>>> {
    let service = ReservationTimeService::new(state.service_context());
    let response = service
        .find_available_times(&query.date, query.theme_id)
        .await?;
    Ok(Json(response))
}

/// POST /times
pub async fn create_time(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationTimeRequest>,
) -> ApiResult<Created<Json<ReservationTimeResponse>>> {
    let service = ReservationTimeService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// DELETE /times/{id}
pub async fn delete_time(
    State(state): State<AppState>,
    IdPath(id): IdPath<TimeId>,
) -> ApiResult<NoContent> {
    let service = ReservationTimeService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
