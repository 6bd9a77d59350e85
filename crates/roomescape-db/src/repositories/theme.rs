//! PostgreSQL implementation of ThemeRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use roomescape_core::entities::{NewTheme, Theme};
use roomescape_core::traits::{RepoResult, ThemeRepository};
use roomescape_core::value_objects::ThemeId;

use crate::models::ThemeModel;

use super::error::{map_db_error, map_still_referenced};

/// PostgreSQL implementation of ThemeRepository
#[derive(Clone)]
pub struct PgThemeRepository {
    pool: PgPool,
}

impl PgThemeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThemeRepository for PgThemeRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Theme>> {
        let rows = sqlx::query_as::<_, ThemeModel>(
            r"
            SELECT id, name, description, thumbnail
            FROM theme
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Theme::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ThemeId) -> RepoResult<Option<Theme>> {
        let result = sqlx::query_as::<_, ThemeModel>(
            r"
            SELECT id, name, description, thumbnail
            FROM theme
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Theme::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, theme: &NewTheme) -> RepoResult<Theme> {
        let model = sqlx::query_as::<_, ThemeModel>(
            r"
            INSERT INTO theme (name, description, thumbnail)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, thumbnail
            ",
        )
        .bind(&theme.name)
        .bind(&theme.description)
        .bind(&theme.thumbnail)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Theme::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ThemeId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM theme WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_still_referenced(e, "theme"))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_popular(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<Theme>> {
        let rows = sqlx::query_as::<_, ThemeModel>(
            r"
            SELECT th.id, th.name, th.description, th.thumbnail
            FROM theme th
            JOIN reservation r ON r.theme_id = th.id
            JOIN reservation_list rl ON rl.reservation_id = r.id
            WHERE r.date BETWEEN $1 AND $2
            GROUP BY th.id, th.name, th.description, th.thumbnail
            ORDER BY COUNT(r.id) DESC, th.id ASC
            LIMIT $3
            ",
        )
        .bind(from)
        .bind(to)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Theme::from).collect())
    }
}
