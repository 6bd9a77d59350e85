//! Reservation service
//!
//! Booking, cancellation and listing of reservations.

use roomescape_core::entities::{parse_date, LoginMember, NewReservation};
use roomescape_core::value_objects::ReservationId;
use roomescape_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateReservationRequest, ReservationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn find_all_reservations(&self) -> ServiceResult<Vec<ReservationResponse>> {
        let reservations = self.ctx.reservation_repo().find_all().await?;
        Ok(reservations
            .iter()
            .map(ReservationResponse::from)
            .collect())
    }

    /// Book a slot on behalf of `member`
    ///
    /// References are checked before the date so an unknown time or theme
    /// is reported even when the date is also malformed.
    #[instrument(skip(self, request, member), fields(member_id = %member.id))]
    pub async fn create(
        &self,
        request: CreateReservationRequest,
        member: &LoginMember,
    ) -> ServiceResult<ReservationResponse> {
        let time = self
            .ctx
            .time_repo()
            .find_by_id(request.time_id)
            .await?
            .ok_or_else(|| DomainError::invalid_time(request.time_id))?;

        let theme = self
            .ctx
            .theme_repo()
            .find_by_id(request.theme_id)
            .await?
            .ok_or_else(|| DomainError::invalid_theme(request.theme_id))?;

        let date = parse_date(&request.date)
            .ok_or_else(|| DomainError::InvalidDate(request.date.clone()))?;

        if self
            .ctx
            .reservation_repo()
            .exists_by(date, time.id, theme.id)
            .await?
        {
            return Err(DomainError::DuplicateReservation.into());
        }

        let draft = NewReservation {
            name: request.name.unwrap_or_else(|| member.name.clone()),
            date,
            time,
            theme,
        };
        let reservation = self.ctx.reservation_repo().create(&draft, member.id).await?;

        info!(
            reservation_id = %reservation.id,
            date = %reservation.date,
            time_id = %reservation.time.id,
            theme_id = %reservation.theme.id,
            "Reservation created"
        );
        Ok(ReservationResponse::from(&reservation))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ReservationId) -> ServiceResult<()> {
        if !self.ctx.reservation_repo().delete(id).await? {
            return Err(DomainError::ReservationNotFound(id).into());
        }

        info!(reservation_id = %id, "Reservation deleted");
        Ok(())
    }

    /// Reservations linked to `member`
    #[instrument(skip(self, member), fields(member_id = %member.id))]
    pub async fn find_my_reservations(
        &self,
        member: &LoginMember,
    ) -> ServiceResult<Vec<ReservationResponse>> {
        let reservations = self.ctx.reservation_repo().find_by_member(member.id).await?;
        Ok(reservations
            .iter()
            .map(ReservationResponse::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::ServiceError;
    use crate::services::test_support;
    use roomescape_core::value_objects::{Role, ThemeId, TimeId};

    fn request(date: &str, time_id: TimeId, theme_id: ThemeId) -> CreateReservationRequest {
        CreateReservationRequest {
            date: date.to_string(),
            time_id,
            theme_id,
            name: None,
        }
    }

    async fn booker(ctx: &ServiceContext) -> LoginMember {
        test_support::member(ctx, "brown", "brown@email.com", "password", Role::Member).await
    }

    #[tokio::test]
    async fn test_create_reservation() {
        let (ctx, _store) = test_support::context();
        let member = booker(&ctx).await;
        let time = test_support::time(&ctx, 0, 0).await;
        let theme = test_support::theme(&ctx, "horror").await;
        let service = ReservationService::new(&ctx);

        let created = service
            .create(request("2100-04-18", time.id, theme.id), &member)
            .await
            .unwrap();

        assert_eq!(created.date, "2100-04-18");
        assert_eq!(created.time.id, TimeId::new(1));
        assert_eq!(created.time.start_at, "00:00");
        assert_eq!(created.theme.id, theme.id);
        assert_eq!(created.name, "brown");

        // Same slot again
        let result = service
            .create(request("2100-04-18", time.id, theme.id), &member)
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::DuplicateReservation))
        ));
    }

    #[tokio::test]
    async fn test_create_with_explicit_name() {
        let (ctx, _store) = test_support::context();
        let member = booker(&ctx).await;
        let time = test_support::time(&ctx, 10, 0).await;
        let theme = test_support::theme(&ctx, "horror").await;

        let mut req = request("2100-04-18", time.id, theme.id);
        req.name = Some("guest".to_string());
        let created = ReservationService::new(&ctx)
            .create(req, &member)
            .await
            .unwrap();

        assert_eq!(created.name, "guest");
    }

    #[tokio::test]
    async fn test_create_with_unknown_time() {
        let (ctx, _store) = test_support::context();
        let member = booker(&ctx).await;
        let theme = test_support::theme(&ctx, "horror").await;

        let result = ReservationService::new(&ctx)
            .create(request("2100-04-18", TimeId::new(42), theme.id), &member)
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::InvalidReference { resource: "time", id: 42 }))
        ));
    }

    #[tokio::test]
    async fn test_create_with_unknown_theme() {
        let (ctx, _store) = test_support::context();
        let member = booker(&ctx).await;
        let time = test_support::time(&ctx, 10, 0).await;

        let result = ReservationService::new(&ctx)
            .create(request("2100-04-18", time.id, ThemeId::new(7)), &member)
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::InvalidReference { resource: "theme", id: 7 }))
        ));
    }

    #[tokio::test]
    async fn test_create_with_malformed_date() {
        let (ctx, _store) = test_support::context();
        let member = booker(&ctx).await;
        let time = test_support::time(&ctx, 10, 0).await;
        let theme = test_support::theme(&ctx, "horror").await;

        let result = ReservationService::new(&ctx)
            .create(request("2100/04/18", time.id, theme.id), &member)
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::InvalidDate(_)))
        ));
    }

    #[tokio::test]
    async fn test_delete_reservation() {
        let (ctx, _store) = test_support::context();
        let member = booker(&ctx).await;
        let time = test_support::time(&ctx, 10, 0).await;
        let theme = test_support::theme(&ctx, "horror").await;
        let service = ReservationService::new(&ctx);

        let missing = service.delete(ReservationId::new(1)).await;
        assert!(matches!(
            missing,
            Err(ServiceError::Domain(DomainError::ReservationNotFound(_)))
        ));

        let created = service
            .create(request("2100-04-18", time.id, theme.id), &member)
            .await
            .unwrap();
        service.delete(created.id).await.unwrap();

        assert!(service.find_all_reservations().await.unwrap().is_empty());
        // The slot is free again
        service
            .create(request("2100-04-18", time.id, theme.id), &member)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_find_my_reservations() {
        let (ctx, _store) = test_support::context();
        let brown = booker(&ctx).await;
        let other =
            test_support::member(&ctx, "neo", "neo@email.com", "password", Role::Member).await;
        let time = test_support::time(&ctx, 10, 0).await;
        let theme = test_support::theme(&ctx, "horror").await;
        let service = ReservationService::new(&ctx);

        let mine = service
            .create(request("2100-04-18", time.id, theme.id), &brown)
            .await
            .unwrap();
        service
            .create(request("2100-04-19", time.id, theme.id), &other)
            .await
            .unwrap();

        let listed = service.find_my_reservations(&brown).await.unwrap();
        assert_eq!(listed, vec![mine]);
        assert_eq!(service.find_all_reservations().await.unwrap().len(), 2);
    }
}
