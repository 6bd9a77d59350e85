//! Tables backing the in-memory store

use std::collections::BTreeMap;

use roomescape_core::entities::{Member, Reservation, ReservationTime, Theme};
use roomescape_core::value_objects::{MemberId, ReservationId, ThemeId, TimeId};

#[derive(Debug, Clone)]
pub(crate) struct StoredMember {
    pub member: Member,
    pub password_hash: String,
}

/// Rows keyed by id; `BTreeMap` keeps id order for listings
#[derive(Debug, Default)]
pub(crate) struct MemoryState {
    pub members: BTreeMap<MemberId, StoredMember>,
    pub times: BTreeMap<TimeId, ReservationTime>,
    pub themes: BTreeMap<ThemeId, Theme>,
    pub reservations: BTreeMap<ReservationId, Reservation>,
    /// reservation_list rows
    pub links: Vec<(ReservationId, MemberId)>,
    sequences: Sequences,
}

/// One counter per table, like a BIGSERIAL column
#[derive(Debug, Default)]
struct Sequences {
    member: i64,
    time: i64,
    theme: i64,
    reservation: i64,
}

fn advance(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl MemoryState {
    pub fn next_member_id(&mut self) -> MemberId {
        MemberId::new(advance(&mut self.sequences.member))
    }

    pub fn next_time_id(&mut self) -> TimeId {
        TimeId::new(advance(&mut self.sequences.time))
    }

    pub fn next_theme_id(&mut self) -> ThemeId {
        ThemeId::new(advance(&mut self.sequences.theme))
    }

    pub fn next_reservation_id(&mut self) -> ReservationId {
        ReservationId::new(advance(&mut self.sequences.reservation))
    }

    pub fn is_time_referenced(&self, id: TimeId) -> bool {
        self.reservations.values().any(|r| r.time.id == id)
    }

    pub fn is_theme_referenced(&self, id: ThemeId) -> bool {
        self.reservations.values().any(|r| r.theme.id == id)
    }

    pub fn is_linked(&self, id: ReservationId) -> bool {
        self.links.iter().any(|(reservation_id, _)| *reservation_id == id)
    }
}
