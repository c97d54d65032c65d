use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/analyze", post(handlers::analyze))
        .route("/:section", get(handlers::section))
        .with_state(state)
}
