//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (Postgres, or the in-memory store used by
//! tests).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    Member, NewMember, NewReservation, NewTheme, Reservation, ReservationTime, Theme,
};
use crate::error::DomainError;
use crate::value_objects::{MemberId, ReservationId, ThemeId, TimeId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// Find member by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a member. Fails with `EmailAlreadyExists` on a duplicate email.
    async fn create(&self, member: &NewMember, password_hash: &str) -> RepoResult<Member>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: MemberId) -> RepoResult<Option<String>>;

    /// List every member ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Member>>;
}

// ============================================================================
// Reservation Time Repository
// ============================================================================

#[async_trait]
pub trait ReservationTimeRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<ReservationTime>>;

    async fn find_by_id(&self, id: TimeId) -> RepoResult<Option<ReservationTime>>;

    /// Insert a time slot. Fails with `DuplicateReservationTime` when the start
    /// time is taken.
    async fn create(&self, start_at: chrono::NaiveTime) -> RepoResult<ReservationTime>;

    /// Delete a time slot, returning whether a row was removed.
    /// Fails with `StillReferenced` when reservations use it.
    async fn delete(&self, id: TimeId) -> RepoResult<bool>;

    async fn exists_by_start_at(&self, start_at: chrono::NaiveTime) -> RepoResult<bool>;

    /// Ids of the time slots already booked for a theme on a date
    async fn find_reserved(&self, date: NaiveDate, theme_id: ThemeId) -> RepoResult<Vec<TimeId>>;
}

// ============================================================================
// Theme Repository
// ============================================================================

#[async_trait]
pub trait ThemeRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Theme>>;

    async fn find_by_id(&self, id: ThemeId) -> RepoResult<Option<Theme>>;

    async fn create(&self, theme: &NewTheme) -> RepoResult<Theme>;

    /// Delete a theme, returning whether a row was removed.
    /// Fails with `StillReferenced` when reservations use it.
    async fn delete(&self, id: ThemeId) -> RepoResult<bool>;

    /// Themes ranked by reservation count for dates in `[from, to]`.
    ///
    /// Only themes with at least one reservation in the window are returned.
    /// Ties are broken by ascending theme id.
    async fn find_popular(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<Theme>>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// List every reservation ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Reservation>>;

    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>>;

    /// Check whether the (date, time, theme) slot is taken
    async fn exists_by(
        &self,
        date: NaiveDate,
        time_id: TimeId,
        theme_id: ThemeId,
    ) -> RepoResult<bool>;

    /// Insert the reservation and link it to the booking member atomically.
    /// Fails with `DuplicateReservation` when the slot is taken.
    async fn create(
        &self,
        reservation: &NewReservation,
        member_id: MemberId,
    ) -> RepoResult<Reservation>;

    /// Delete a reservation and its member link, returning whether a row was
    /// removed
    async fn delete(&self, id: ReservationId) -> RepoResult<bool>;

    /// Reservations booked by a member
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Reservation>>;
}
