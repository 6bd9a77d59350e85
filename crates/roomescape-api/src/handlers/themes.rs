//! Theme handlers

use axum::{extract::State, Json};
use roomescape_core::ThemeId;
use roomescape_service::dto::{CreateThemeRequest, ThemeResponse};
use roomescape_service::ThemeService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /themes
pub async fn list_themes(State(state): State<AppState>) -> ApiResult<Json<Vec<ThemeResponse>>> {
    let service = ThemeService::new(state.service_context());
    let response = service.find_all_themes().await?;
    Ok(Json(response))
}

/// Most reserved themes of the past week
///
/// GET /themes/popular
pub async fn popular_themes(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ThemeResponse>>> {
    let service = ThemeService::new(state.service_context());
    let response = service.find_popular_themes().await?;
    Ok(Json(response))
}

/// POST /themes
pub async fn create_theme(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateThemeRequest>,
) -> ApiResult<Created<Json<ThemeResponse>>> {
    let service = ThemeService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// DELETE /themes/{id}
pub async fn delete_theme(
    State(state): State<AppState>,
    IdPath(id): IdPath<ThemeId>,
) -> ApiResult<NoContent> {
    let service = ThemeService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
