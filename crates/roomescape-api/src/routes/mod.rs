//! Route definitions
//!
//! All API routes organized by resource.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, health, members, reservations, themes, times};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(member_routes())
        .merge(reservation_routes())
        .merge(theme_routes())
        .merge(time_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/login/check", get(auth::check_login))
        .route("/logout", post(auth::logout))
}

fn member_routes() -> Router<AppState> {
    Router::new().route(
        "/members",
        get(members::list_members).post(members::signup),
    )
}

fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/reservations/:id", delete(reservations::delete_reservation))
        .route("/reservations-mine", get(reservations::my_reservations))
}

fn theme_routes() -> Router<AppState> {
    Router::new()
        .route("/themes", get(themes::list_themes).post(themes::create_theme))
        // Static segment wins over the `:id` capture
        .route("/themes/popular", get(themes::popular_themes))
        .route("/themes/:id", delete(themes::delete_theme))
}

fn time_routes() -> Router<AppState> {
    Router::new()
        .route("/times", get(times::list_times).post(times::create_time))
        .route("/times/available", get(times::available_times))
        .route("/times/:id", delete(times::delete_time))
}
