//! Repository trait implementations over [`MemoryState`]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use roomescape_core::entities::{
    Member, NewMember, NewReservation, NewTheme, Reservation, ReservationTime, Theme,
    START_AT_FORMAT,
};
use roomescape_core::error::DomainError;
use roomescape_core::traits::{
    MemberRepository, RepoResult, ReservationRepository, ReservationTimeRepository,
    ThemeRepository,
};
use roomescape_core::value_objects::{MemberId, ReservationId, ThemeId, TimeId};

use super::state::{MemoryState, StoredMember};

type SharedState = Arc<RwLock<MemoryState>>;

// ============================================================================
// Members
// ============================================================================

#[derive(Debug, Clone)]
pub struct MemoryMemberRepository {
    state: SharedState,
}

impl MemoryMemberRepository {
    pub(super) fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        Ok(self.state.read().members.get(&id).map(|m| m.member.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .state
            .read()
            .members
            .values()
            .find(|m| m.member.email == email)
            .map(|m| m.member.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .state
            .read()
            .members
            .values()
            .any(|m| m.member.email == email))
    }

    async fn create(&self, member: &NewMember, password_hash: &str) -> RepoResult<Member> {
        let mut state = self.state.write();
        if state.members.values().any(|m| m.member.email == member.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let id = state.next_member_id();
        let created = Member::new(id, member.name.clone(), member.email.clone(), member.role);
        state.members.insert(
            id,
            StoredMember {
                member: created.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(created)
    }

    async fn get_password_hash(&self, id: MemberId) -> RepoResult<Option<String>> {
        Ok(self
            .state
            .read()
            .members
            .get(&id)
            .map(|m| m.password_hash.clone()))
    }

    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        Ok(self
            .state
            .read()
            .members
            .values()
            .map(|m| m.member.clone())
            .collect())
    }
}

// ============================================================================
// Reservation times
// ============================================================================

#[derive(Debug, Clone)]
pub struct MemoryReservationTimeRepository {
    state: SharedState,
}

impl MemoryReservationTimeRepository {
    pub(super) fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl ReservationTimeRepository for MemoryReservationTimeRepository {
    async fn find_all(&self) -> RepoResult<Vec<ReservationTime>> {
        let mut times: Vec<_> = self.state.read().times.values().copied().collect();
        times.sort_by_key(|t| (t.start_at, t.id));
        Ok(times)
    }

    async fn find_by_id(&self, id: TimeId) -> RepoResult<Option<ReservationTime>> {
        Ok(self.state.read().times.get(&id).copied())
    }

    async fn create(&self, start_at: NaiveTime) -> RepoResult<ReservationTime> {
        let mut state = self.state.write();
        if state.times.values().any(|t| t.start_at == start_at) {
            return Err(DomainError::DuplicateReservationTime(
                start_at.format(START_AT_FORMAT).to_string(),
            ));
        }

        let time = ReservationTime::new(state.next_time_id(), start_at);
        state.times.insert(time.id, time);
        Ok(time)
    }

    async fn delete(&self, id: TimeId) -> RepoResult<bool> {
        let mut state = self.state.write();
        if state.is_time_referenced(id) {
            return Err(DomainError::StillReferenced("reservation time"));
        }
        Ok(state.times.remove(&id).is_some())
    }

    async fn exists_by_start_at(&self, start_at: NaiveTime) -> RepoResult<bool> {
        Ok(self
            .state
            .read()
            .times
            .values()
            .any(|t| t.start_at == start_at))
    }

    async fn find_reserved(&self, date: NaiveDate, theme_id: ThemeId) -> RepoResult<Vec<TimeId>> {
        Ok(self
            .state
            .read()
            .reservations
            .values()
            .filter(|r| r.date == date && r.theme.id == theme_id)
            .map(|r| r.time.id)
            .collect())
    }
}

// ============================================================================
// Themes
// ============================================================================

#[derive(Debug, Clone)]
pub struct MemoryThemeRepository {
    state: SharedState,
}

impl MemoryThemeRepository {
    pub(super) fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl ThemeRepository for MemoryThemeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Theme>> {
        Ok(self.state.read().themes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ThemeId) -> RepoResult<Option<Theme>> {
        Ok(self.state.read().themes.get(&id).cloned())
    }

    async fn create(&self, theme: &NewTheme) -> RepoResult<Theme> {
        let mut state = self.state.write();
        let created = theme.clone().into_theme(state.next_theme_id());
        state.themes.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: ThemeId) -> RepoResult<bool> {
        let mut state = self.state.write();
        if state.is_theme_referenced(id) {
            return Err(DomainError::StillReferenced("theme"));
        }
        Ok(state.themes.remove(&id).is_some())
    }

    async fn find_popular(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<Theme>> {
        let state = self.state.read();

        let mut counts: HashMap<ThemeId, usize> = HashMap::new();
        for reservation in state.reservations.values() {
            if reservation.date >= from && reservation.date <= to && state.is_linked(reservation.id)
            {
                *counts.entry(reservation.theme.id).or_default() += 1;
            }
        }

        let mut ranked: Vec<(ThemeId, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(ranked
            .into_iter()
            .filter_map(|(id, _)| state.themes.get(&id).cloned())
            .take(limit)
            .collect())
    }
}

// ============================================================================
// Reservations
// ============================================================================

#[derive(Debug, Clone)]
pub struct MemoryReservationRepository {
    state: SharedState,
}

impl MemoryReservationRepository {
    pub(super) fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl ReservationRepository for MemoryReservationRepository {
    async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        Ok(self.state.read().reservations.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>> {
        Ok(self.state.read().reservations.get(&id).cloned())
    }

    async fn exists_by(
        &self,
        date: NaiveDate,
        time_id: TimeId,
        theme_id: ThemeId,
    ) -> RepoResult<bool> {
        Ok(self
            .state
            .read()
            .reservations
            .values()
            .any(|r| r.slot() == (date, time_id, theme_id)))
    }

    async fn create(
        &self,
        reservation: &NewReservation,
        member_id: MemberId,
    ) -> RepoResult<Reservation> {
        // Check and insert under one write lock
        let mut state = self.state.write();

        if !state.times.contains_key(&reservation.time.id) {
            return Err(DomainError::invalid_time(reservation.time.id));
        }
        if !state.themes.contains_key(&reservation.theme.id) {
            return Err(DomainError::invalid_theme(reservation.theme.id));
        }
        if !state.members.contains_key(&member_id) {
            return Err(DomainError::MemberNotFound(member_id));
        }

        let slot = reservation.slot();
        if state.reservations.values().any(|r| r.slot() == slot) {
            return Err(DomainError::DuplicateReservation);
        }

        let created = reservation.clone().into_reservation(state.next_reservation_id());
        state.reservations.insert(created.id, created.clone());
        state.links.push((created.id, member_id));
        Ok(created)
    }

    async fn delete(&self, id: ReservationId) -> RepoResult<bool> {
        let mut state = self.state.write();
        let removed = state.reservations.remove(&id).is_some();
        state.links.retain(|(reservation_id, _)| *reservation_id != id);
        Ok(removed)
    }

    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Reservation>> {
        let state = self.state.read();
        let mut mine: Vec<Reservation> = state
            .links
            .iter()
            .filter(|(_, owner)| *owner == member_id)
            .filter_map(|(id, _)| state.reservations.get(id).cloned())
            .collect();
        mine.sort_by_key(|r| (r.date, r.time.start_at, r.id));
        Ok(mine)
    }
}
