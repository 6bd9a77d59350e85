//! PostgreSQL implementation of ReservationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use roomescape_core::entities::{NewReservation, Reservation};
use roomescape_core::error::DomainError;
use roomescape_core::traits::{RepoResult, ReservationRepository};
use roomescape_core::value_objects::{MemberId, ReservationId, ThemeId, TimeId};

use crate::models::ReservationRowModel;

use super::error::{map_db_error, map_unique_violation};

/// Shared projection joining a reservation with its time slot and theme
const SELECT_RESERVATION: &str = r"
    SELECT r.id, r.name, r.date,
           t.id AS time_id, t.start_at,
           th.id AS theme_id, th.name AS theme_name,
           th.description AS theme_description, th.thumbnail AS theme_thumbnail
    FROM reservation r
    JOIN reservation_time t ON t.id = r.time_id
    JOIN theme th ON th.id = r.theme_id
";

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRowModel>(&format!(
            "{SELECT_RESERVATION} ORDER BY r.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationRowModel>(&format!(
            "{SELECT_RESERVATION} WHERE r.id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reservation::from))
    }

    #[instrument(skip(self))]
    async fn exists_by(
        &self,
        date: NaiveDate,
        time_id: TimeId,
        theme_id: ThemeId,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM reservation
                WHERE date = $1 AND time_id = $2 AND theme_id = $3
            )
            ",
        )
        .bind(date)
        .bind(time_id.into_inner())
        .bind(theme_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, reservation), fields(date = %reservation.date))]
    async fn create(
        &self,
        reservation: &NewReservation,
        member_id: MemberId,
    ) -> RepoResult<Reservation> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO reservation (name, date, time_id, theme_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&reservation.name)
        .bind(reservation.date)
        .bind(reservation.time.id.into_inner())
        .bind(reservation.theme.id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateReservation))?;

        sqlx::query(
            r"
            INSERT INTO reservation_list (reservation_id, member_id)
            VALUES ($1, $2)
            ",
        )
        .bind(id)
        .bind(member_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(reservation.clone().into_reservation(ReservationId::new(id)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ReservationId) -> RepoResult<bool> {
        // reservation_list rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM reservation WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRowModel>(&format!(
            "{SELECT_RESERVATION}
             JOIN reservation_list rl ON rl.reservation_id = r.id
             WHERE rl.member_id = $1
             ORDER BY r.date, t.start_at, r.id"
        ))
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}
