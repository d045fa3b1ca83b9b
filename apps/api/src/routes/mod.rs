pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match-score", post(handlers::handle_match_score))
        .route(
            "/api/v1/rank-candidates",
            post(handlers::handle_rank_candidates),
        )
        .route("/api/v1/weights", get(handlers::handle_get_weights))
        .with_state(state)
}
