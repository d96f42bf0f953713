use crate::handlers;
use crate::state::AppState;
use axum::{routing::any, Router};

/// `/feedback` reads a record back; every other path starts a new probe.
pub fn create_probe_routes(state: AppState) -> Router {
    Router::new()
        .route("/feedback", any(handlers::get_feedback))
        .fallback(handlers::register_probe)
        .with_state(state)
}
