pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advice::handlers as advice_handlers;
use crate::exam::handlers as exam_handlers;
use crate::roadmap::handlers as roadmap_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/advice", post(advice_handlers::handle_advice))
        .route("/api/v1/roadmap", post(roadmap_handlers::handle_roadmap))
        .route("/api/v1/exam", post(exam_handlers::handle_exam))
        .with_state(state)
}
