//! Authentication handlers
//!
//! Cookie-based login, logout and session check.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use roomescape_service::dto::{LoginRequest, MemberResponse};
use roomescape_service::AuthService;

use crate::extractors::{AuthMember, ValidatedJson, TOKEN_COOKIE};
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, StatusCode)> {
    let service = AuthService::new(state.service_context());
    let token = service.check_login(request).await?;

    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), StatusCode::OK))
}

/// Clear the session cookie
///
/// POST /logout
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));
    (jar, StatusCode::OK)
}

/// Return the member behind the session cookie
///
/// GET /login/check
pub async fn check_login(AuthMember(member): AuthMember) -> Json<MemberResponse> {
    Json(MemberResponse::from(&member))
}
