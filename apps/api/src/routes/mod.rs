pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::candidates::handlers as candidate_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route(
            "/api/v1/ai/analyze-resume",
            post(analysis_handlers::handle_analyze_resume),
        )
        // Candidate pool
        .route(
            "/api/v1/candidates",
            get(candidate_handlers::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates/find",
            post(candidate_handlers::handle_find_candidates),
        )
        .route(
            "/api/v1/candidates/:id",
            get(candidate_handlers::handle_get_candidate),
        )
        .with_state(state)
}
