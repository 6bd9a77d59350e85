//! Member service
//!
//! Signup and the admin member listing.

use roomescape_common::auth::{hash_password, validate_password_strength};
use roomescape_core::entities::NewMember;
use roomescape_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{MemberResponse, SignupRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a MEMBER-role account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<MemberResponse> {
        validate_password_strength(&request.password)?;

        if self.ctx.member_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;
        let member = self
            .ctx
            .member_repo()
            .create(&NewMember::member(request.name, request.email), &password_hash)
            .await?;

        info!(member_id = %member.id, "Member registered");
        Ok(MemberResponse::from(member))
    }

    /// List every member
    #[instrument(skip(self))]
    pub async fn find_all_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().find_all().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }
}
