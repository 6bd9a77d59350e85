//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use roomescape_common::{hash_password, JwtService};
use roomescape_core::entities::{LoginMember, NewMember, NewTheme, ReservationTime, Theme};
use roomescape_core::traits::{MemberRepository, ReservationTimeRepository, ThemeRepository};
use roomescape_core::value_objects::Role;
use roomescape_db::MemoryStore;

use super::context::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "service-test-secret-key";

pub fn context() -> (ServiceContext, MemoryStore) {
    let store = MemoryStore::new();
    let ctx = ServiceContextBuilder::new()
        .memory(&store)
        .token_provider(Arc::new(JwtService::new(TEST_SECRET, 3600)))
        .build()
        .unwrap();
    (ctx, store)
}

pub async fn member(
    ctx: &ServiceContext,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> LoginMember {
    let hash = hash_password(password).unwrap();
    ctx.member_repo()
        .create(&NewMember::member(name, email).with_role(role), &hash)
        .await
        .unwrap()
        .into()
}

pub async fn time(ctx: &ServiceContext, h: u32, m: u32) -> ReservationTime {
    ctx.time_repo()
        .create(NaiveTime::from_hms_opt(h, m, 0).unwrap())
        .await
        .unwrap()
}

pub async fn theme(ctx: &ServiceContext, name: &str) -> Theme {
    ctx.theme_repo()
        .create(&NewTheme::new(
            name,
            format!("{name} description"),
            "https://example.com/t.png",
        ))
        .await
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
