//! # roomescape-db
//!
//! Database layer implementing the repository traits of `roomescape-core`.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations (`migrations/`)
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - PostgreSQL repository implementations
//! - An in-memory store implementing the same traits, for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomescape_db::pool::{create_pool, run_migrations, PoolConfig};
//! use roomescape_db::PgThemeRepository;
//! use roomescape_core::traits::ThemeRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let themes = PgThemeRepository::new(pool).find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, ping, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgMemberRepository, PgReservationRepository, PgReservationTimeRepository, PgThemeRepository,
};
