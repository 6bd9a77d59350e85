//! PostgreSQL implementation of ReservationTimeRepository

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use tracing::instrument;

use roomescape_core::entities::{ReservationTime, START_AT_FORMAT};
use roomescape_core::error::DomainError;
use roomescape_core::traits::{RepoResult, ReservationTimeRepository};
use roomescape_core::value_objects::{ThemeId, TimeId};

use crate::models::ReservationTimeModel;

use super::error::{map_db_error, map_still_referenced, map_unique_violation};

/// PostgreSQL implementation of ReservationTimeRepository
#[derive(Clone)]
pub struct PgReservationTimeRepository {
    pool: PgPool,
}

impl PgReservationTimeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationTimeRepository for PgReservationTimeRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ReservationTime>> {
        let rows = sqlx::query_as::<_, ReservationTimeModel>(
            r"
            SELECT id, start_at FROM reservation_time ORDER BY start_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ReservationTime::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TimeId) -> RepoResult<Option<ReservationTime>> {
        let result = sqlx::query_as::<_, ReservationTimeModel>(
            r"
            SELECT id, start_at FROM reservation_time WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReservationTime::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, start_at: NaiveTime) -> RepoResult<ReservationTime> {
        let model = sqlx::query_as::<_, ReservationTimeModel>(
            r"
            INSERT INTO reservation_time (start_at)
            VALUES ($1)
            RETURNING id, start_at
            ",
        )
        .bind(start_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DuplicateReservationTime(start_at.format(START_AT_FORMAT).to_string())
            })
        })?;

        Ok(ReservationTime::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TimeId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM reservation_time WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_still_referenced(e, "reservation time"))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn exists_by_start_at(&self, start_at: NaiveTime) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM reservation_time WHERE start_at = $1)
            ",
        )
        .bind(start_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_reserved(&self, date: NaiveDate, theme_id: ThemeId) -> RepoResult<Vec<TimeId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT time_id FROM reservation
            WHERE date = $1 AND theme_id = $2
            ",
        )
        .bind(date)
        .bind(theme_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(TimeId::new).collect())
    }
}
