mod repositories;

pub use repositories::{
    MemberRepository, RepoResult, ReservationRepository, ReservationTimeRepository,
    ThemeRepository,
};
