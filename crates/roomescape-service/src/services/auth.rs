//! Authentication service
//!
//! Handles credential checks and resolving session tokens back to members.

use roomescape_common::auth::verify_password;
use roomescape_common::AppError;
use roomescape_core::entities::LoginMember;
use tracing::{info, instrument, warn};

use crate::dto::LoginRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check email and password, issuing a session token on success
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn check_login(&self, request: LoginRequest) -> ServiceResult<String> {
        let member = self
            .ctx
            .member_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .member_repo()
            .get_password_hash(member.id)
            .await?
            .ok_or_else(|| {
                warn!(member_id = %member.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(member_id = %member.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self.ctx.token_provider().issue(member.id)?;

        info!(member_id = %member.id, "Member logged in");
        Ok(token)
    }

    /// Resolve a session token to the member it was issued for
    ///
    /// Fails with `InvalidToken` when the token is malformed or its member no
    /// longer exists.
    #[instrument(skip_all)]
    pub async fn find_login_member_by_token(&self, token: &str) -> ServiceResult<LoginMember> {
        let member_id = self.ctx.token_provider().resolve(token)?;

        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        Ok(LoginMember::from(member))
    }
}
