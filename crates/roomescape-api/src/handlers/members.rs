//! Member handlers

use axum::{extract::State, Json};
use roomescape_service::dto::{MemberResponse, SignupRequest};
use roomescape_service::MemberService;

use crate::extractors::{AdminMember, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new member
///
/// POST /members
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// List all members (admin only)
///
/// GET /members
pub async fn list_members(
    State(state): State<AppState>,
    _admin: AdminMember,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let response = service.find_all_members().await?;
    Ok(Json(response))
}
