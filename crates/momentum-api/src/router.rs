//! Route definitions for the Momentum HTTP API.
//!
//! All domain routes are mounted under `/api`; the health probe lives at
//! the root. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(deepwork_routes())
        .merge(schedule_routes())
        .merge(memoir_routes())
        .merge(notification_routes())
        .merge(summary_routes());

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Auth endpoints: signup, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Deep work session lifecycle
fn deepwork_routes() -> Router<AppState> {
    Router::new()
        .route("/deepwork", post(handlers::deepwork::start))
        .route("/deepwork", get(handlers::deepwork::list))
        .route("/deepwork/{id}", get(handlers::deepwork::get))
        .route("/deepwork/{id}", delete(handlers::deepwork::delete))
        .route("/deepwork/{id}/finish", put(handlers::deepwork::finish))
        .route(
            "/deepwork/{id}/distraction",
            put(handlers::deepwork::distraction),
        )
}

/// Schedule CRUD and status transitions
fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/schedules", post(handlers::schedule::create))
        .route("/schedules", get(handlers::schedule::list))
        .route("/schedules/{id}", get(handlers::schedule::get))
        .route("/schedules/{id}", put(handlers::schedule::update))
        .route("/schedules/{id}", delete(handlers::schedule::delete))
        .route(
            "/schedules/{id}/status",
            put(handlers::schedule::update_status),
        )
}

/// Memoir CRUD
fn memoir_routes() -> Router<AppState> {
    Router::new()
        .route("/memoirs", post(handlers::memoir::create))
        .route("/memoirs", get(handlers::memoir::list))
        .route("/memoirs/{id}", get(handlers::memoir::get))
        .route("/memoirs/{id}", put(handlers::memoir::update))
        .route("/memoirs/{id}", delete(handlers::memoir::delete))
}

/// Notification listing and acknowledgement
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/check-all",
            put(handlers::notification::check_all),
        )
        .route(
            "/notifications/{id}/check",
            put(handlers::notification::check),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete),
        )
}

/// Summary retrieval and daily rebuild
fn summary_routes() -> Router<AppState> {
    Router::new()
        .route("/summaries/daily", get(handlers::summary::daily))
        .route("/summaries/weekly", get(handlers::summary::weekly))
        .route("/summaries/monthly", get(handlers::summary::monthly))
        .route(
            "/summaries/daily/rebuild",
            post(handlers::summary::rebuild_daily),
        )
}
