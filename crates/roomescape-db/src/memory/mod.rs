//! In-memory repositories
//!
//! A process-local store implementing every repository trait. It enforces the
//! same constraints as the Postgres schema (unique slot, unique start time,
//! unique email, no deleting referenced rows) so services and HTTP handlers can
//! be exercised without a database.

mod repositories;
mod state;

pub use repositories::{
    MemoryMemberRepository, MemoryReservationRepository, MemoryReservationTimeRepository,
    MemoryThemeRepository,
};

use parking_lot::RwLock;
use std::sync::Arc;

use state::MemoryState;

/// Shared handle to one in-memory database
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repository(&self) -> MemoryMemberRepository {
        MemoryMemberRepository::new(Arc::clone(&self.state))
    }

    pub fn theme_repository(&self) -> MemoryThemeRepository {
        MemoryThemeRepository::new(Arc::clone(&self.state))
    }

    pub fn reservation_time_repository(&self) -> MemoryReservationTimeRepository {
        MemoryReservationTimeRepository::new(Arc::clone(&self.state))
    }

    pub fn reservation_repository(&self) -> MemoryReservationRepository {
        MemoryReservationRepository::new(Arc::clone(&self.state))
    }
}
