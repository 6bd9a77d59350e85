//! Database connection pool management

mod migrations;
mod postgres;

pub use migrations::{run_migrations, EmbeddedMigrations};
pub use postgres::{create_pool, ping, PoolConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
