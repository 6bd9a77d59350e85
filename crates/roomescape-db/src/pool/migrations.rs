//! Schema migrations compiled into the binary
//!
//! The SQL files under `migrations/` are embedded at build time, so a
//! deployed binary does not need the source tree to bring a database up to
//! date.

use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::postgres::PgPool;
use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;
use tracing::info;

/// (version, description, sql) in ascending version order
const MIGRATIONS: &[(i64, &str, &str)] = &[(
    20240101000000,
    "init",
    include_str!("../../migrations/20240101000000_init.sql"),
)];

/// Migration source backed by the embedded SQL files
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMigrations;

impl MigrationSource<'static> for EmbeddedMigrations {
    fn resolve(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 'static>> {
        Box::pin(async move {
            Ok(MIGRATIONS
                .iter()
                .map(|&(version, description, sql)| {
                    Migration::new(
                        version,
                        Cow::Borrowed(description),
                        MigrationType::Simple,
                        Cow::Borrowed(sql),
                        false,
                    )
                })
                .collect())
        })
    }
}

/// Apply pending embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations).await?;
    migrator.run(pool).await?;
    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
