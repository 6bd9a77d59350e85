//! Theme service
//!
//! Theme CRUD plus the popularity ranking.

use chrono::{Duration, Local, NaiveDate};
use roomescape_core::entities::NewTheme;
use roomescape_core::value_objects::ThemeId;
use roomescape_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateThemeRequest, ThemeResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Length of the trailing window, in days before today
pub const POPULAR_WINDOW_DAYS: i64 = 7;

/// Maximum number of popular themes returned
pub const POPULAR_LIMIT: i64 = 10;

/// Theme service
pub struct ThemeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThemeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn find_all_themes(&self) -> ServiceResult<Vec<ThemeResponse>> {
        let themes = self.ctx.theme_repo().find_all().await?;
        Ok(themes.into_iter().map(ThemeResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateThemeRequest) -> ServiceResult<ThemeResponse> {
        let draft = NewTheme::new(request.name, request.description, request.thumbnail);
        let theme = self.ctx.theme_repo().create(&draft).await?;

        info!(theme_id = %theme.id, "Theme created");
        Ok(ThemeResponse::from(theme))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ThemeId) -> ServiceResult<()> {
        if !self.ctx.theme_repo().delete(id).await? {
            return Err(DomainError::ThemeNotFound(id).into());
        }

        info!(theme_id = %id, "Theme deleted");
        Ok(())
    }

    /// Most reserved themes over the trailing week, relative to the local date
    pub async fn find_popular_themes(&self) -> ServiceResult<Vec<ThemeResponse>> {
        self.find_popular_themes_on(Local::now().date_naive()).await
    }

    /// Most reserved themes for dates in `[today - 7 days, today]`
    #[instrument(skip(self))]
    pub async fn find_popular_themes_on(
        &self,
        today: NaiveDate,
    ) -> ServiceResult<Vec<ThemeResponse>> {
        let from = today - Duration::days(POPULAR_WINDOW_DAYS);
        let themes = self
            .ctx
            .theme_repo()
            .find_popular(from, today, POPULAR_LIMIT)
            .await?;
        Ok(themes.into_iter().map(ThemeResponse::from).collect())
    }
}
