pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route("/api/v1/weights", get(handlers::handle_list_weights))
        // Screening
        .route("/api/v1/screenings", post(handlers::handle_screen))
        .route("/api/v1/screenings/upload", post(handlers::handle_upload))
        .route("/api/v1/screenings/score", post(handlers::handle_score))
        .with_state(state)
}
