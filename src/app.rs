use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood/:mood", post(handlers::save_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/mood", post(handlers::save))
        .with_state(state)
}
