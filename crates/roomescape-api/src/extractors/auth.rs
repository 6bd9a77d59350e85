//! Authentication extractors
//!
//! Resolve the session cookie into the calling member.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use axum_extra::extract::CookieJar;
use roomescape_common::AppError;
use roomescape_core::entities::LoginMember;
use roomescape_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE: &str = "token";

/// Pull the session token out of the request cookies
fn token_from_parts(parts: &Parts) -> Result<String, ApiError> {
    if !parts.headers.contains_key(header::COOKIE) {
        return Err(AppError::MissingAuth("login info missing").into());
    }

    CookieJar::from_headers(&parts.headers)
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::MissingAuth("token does not exist").into())
}

/// Member resolved from the `token` cookie
#[derive(Debug, Clone)]
pub struct AuthMember(pub LoginMember);

#[async_trait]
impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts)?;

        let app_state = AppState::from_ref(state);
        let member = AuthService::new(app_state.service_context())
            .find_login_member_by_token(&token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid session token");
                e
            })?;

        Ok(AuthMember(member))
    }
}

/// Authenticated member holding the ADMIN role
#[derive(Debug, Clone)]
pub struct AdminMember(pub LoginMember);

#[async_trait]
impl<S> FromRequestParts<S> for AdminMember
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthMember(member) = AuthMember::from_request_parts(parts, state).await?;

        if !member.is_admin() {
            tracing::warn!(member_id = %member.id, "Admin route denied");
            return Err(AppError::InsufficientPermissions.into());
        }

        Ok(AdminMember(member))
    }
}
