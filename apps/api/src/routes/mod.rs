pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guidance::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Kept at the root path for older clients
        .route("/career-guidance", post(handlers::handle_career_guidance))
        .route(
            "/api/v1/career-guidance",
            post(handlers::handle_career_guidance),
        )
        .route("/api/v1/careers", get(handlers::handle_list_careers))
        .with_state(state)
}
