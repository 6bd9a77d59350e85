//! Reservation time service

use chrono::NaiveTime;
use roomescape_core::entities::{parse_date, AvailableTime, START_AT_FORMAT};
use roomescape_core::value_objects::{ThemeId, TimeId};
use roomescape_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{AvailableTimeResponse, CreateReservationTimeRequest, ReservationTimeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Accepts `HH:MM`, and `HH:MM:SS` as sent by some clients
fn parse_start_at(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, START_AT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Reservation time service
pub struct ReservationTimeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationTimeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn find_all_times(&self) -> ServiceResult<Vec<ReservationTimeResponse>> {
        let times = self.ctx.time_repo().find_all().await?;
        Ok(times.into_iter().map(ReservationTimeResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(start_at = %request.start_at))]
    pub async fn create(
        &self,
        request: CreateReservationTimeRequest,
    ) -> ServiceResult<ReservationTimeResponse> {
        let start_at = parse_start_at(&request.start_at).ok_or_else(|| {
            ServiceError::validation(format!("Invalid start time: {}", request.start_at))
        })?;

        if self.ctx.time_repo().exists_by_start_at(start_at).await? {
            return Err(DomainError::DuplicateReservationTime(request.start_at).into());
        }

        let time = self.ctx.time_repo().create(start_at).await?;

        info!(time_id = %time.id, "Reservation time created");
        Ok(ReservationTimeResponse::from(time))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: TimeId) -> ServiceResult<()> {
        if !self.ctx.time_repo().delete(id).await? {
            return Err(DomainError::ReservationTimeNotFound(id).into());
        }

        info!(time_id = %id, "Reservation time deleted");
        Ok(())
    }

    /// Every time slot, flagged with whether `(date, theme_id)` already holds it
    #[instrument(skip(self))]
    pub async fn find_available_times(
        &self,
        date: &str,
        theme_id: ThemeId,
    ) -> ServiceResult<Vec<AvailableTimeResponse>> {
        let date =
            parse_date(date).ok_or_else(|| DomainError::InvalidDate(date.to_string()))?;

        if self.ctx.theme_repo().find_by_id(theme_id).await?.is_none() {
            return Err(DomainError::invalid_theme(theme_id).into());
        }

        let reserved = self.ctx.time_repo().find_reserved(date, theme_id).await?;
        let times = self.ctx.time_repo().find_all().await?;

        Ok(times
            .into_iter()
            .map(|time| {
                AvailableTimeResponse::from(AvailableTime {
                    already_booked: reserved.contains(&time.id),
                    time,
                })
            })
            .collect())
    }
}
