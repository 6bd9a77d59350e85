//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use roomescape_common::{AppConfig, AppError, JwtService};
use roomescape_db::{create_pool, run_migrations, MemoryStore, PoolConfig};
use roomescape_service::{ServiceContextBuilder, ServiceError};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(
        create_router(),
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

fn token_provider(config: &AppConfig) -> Arc<JwtService> {
    Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry))
}

fn build_error(e: ServiceError) -> AppError {
    AppError::Config(e.to_string())
}

/// Connect to PostgreSQL, apply migrations and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let service_context = ServiceContextBuilder::new()
        .postgres(&pool)
        .token_provider(token_provider(&config))
        .build()
        .map_err(build_error)?;

    Ok(AppState::new(service_context, config).with_pool(pool))
}

/// Create AppState backed by an in-memory store
pub fn create_memory_app_state(
    config: AppConfig,
    store: &MemoryStore,
) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .memory(store)
        .token_provider(token_provider(&config))
        .build()
        .map_err(build_error)?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
