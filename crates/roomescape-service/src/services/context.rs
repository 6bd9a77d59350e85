//! Service context - dependency container for services
//!
//! Holds the repositories and the token provider needed by services.

use std::sync::Arc;

use roomescape_common::auth::TokenProvider;
use roomescape_core::traits::{
    MemberRepository, ReservationRepository, ReservationTimeRepository, ThemeRepository,
};
use roomescape_db::{
    MemoryStore, PgMemberRepository, PgPool, PgReservationRepository, PgReservationTimeRepository,
    PgThemeRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    theme_repo: Arc<dyn ThemeRepository>,
    time_repo: Arc<dyn ReservationTimeRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,

    // Session tokens
    token_provider: Arc<dyn TokenProvider>,
}

impl ServiceContext {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        theme_repo: Arc<dyn ThemeRepository>,
        time_repo: Arc<dyn ReservationTimeRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            member_repo,
            theme_repo,
            time_repo,
            reservation_repo,
            token_provider,
        }
    }

    // === Repositories ===

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn theme_repo(&self) -> &dyn ThemeRepository {
        self.theme_repo.as_ref()
    }

    pub fn time_repo(&self) -> &dyn ReservationTimeRepository {
        self.time_repo.as_ref()
    }

    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    // === Services ===

    pub fn token_provider(&self) -> &dyn TokenProvider {
        self.token_provider.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    theme_repo: Option<Arc<dyn ThemeRepository>>,
    time_repo: Option<Arc<dyn ReservationTimeRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the PostgreSQL repositories for every table
    pub fn postgres(self, pool: &PgPool) -> Self {
        self.member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
            .theme_repo(Arc::new(PgThemeRepository::new(pool.clone())))
            .time_repo(Arc::new(PgReservationTimeRepository::new(pool.clone())))
            .reservation_repo(Arc::new(PgReservationRepository::new(pool.clone())))
    }

    /// Use the in-memory repositories for every table
    pub fn memory(self, store: &MemoryStore) -> Self {
        self.member_repo(Arc::new(store.member_repository()))
            .theme_repo(Arc::new(store.theme_repository()))
            .time_repo(Arc::new(store.reservation_time_repository()))
            .reservation_repo(Arc::new(store.reservation_repository()))
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn theme_repo(mut self, repo: Arc<dyn ThemeRepository>) -> Self {
        self.theme_repo = Some(repo);
        self
    }

    pub fn time_repo(mut self, repo: Arc<dyn ReservationTimeRepository>) -> Self {
        self.time_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn require<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext::new(
            require(self.member_repo, "member_repo")?,
            require(self.theme_repo, "theme_repo")?,
            require(self.time_repo, "time_repo")?,
            require(self.reservation_repo, "reservation_repo")?,
            require(self.token_provider, "token_provider")?,
        ))
    }
}
