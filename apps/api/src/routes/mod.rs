pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::library::handlers as library_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching & ranking engine
        .route("/api/v1/match", post(matching_handlers::handle_match))
        .route(
            "/api/v1/match/results/:job_id",
            get(matching_handlers::handle_get_results),
        )
        // Resume library
        .route("/api/v1/resumes", get(library_handlers::handle_list_resumes))
        .route(
            "/api/v1/resumes/prune",
            post(library_handlers::handle_prune),
        )
        .with_state(state)
}
