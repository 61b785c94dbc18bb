//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::learning::Level;
use crate::roadmap::{custom_roadmap, RoadmapParams};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub levels: Vec<Level>,
    /// True when generation failed and the empty fallback was substituted.
    pub degraded: bool,
}

/// POST /api/v1/roadmap
///
/// Generates a 3-level roadmap for one category. An empty `levels` list with
/// `degraded: true` means generation failed; unknown category ids still
/// generate against the default category's material.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(params): Json<RoadmapParams>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if params.category_id.trim().is_empty() {
        return Err(AppError::Validation(
            "categoryId cannot be empty".to_string(),
        ));
    }

    let result = custom_roadmap(&state.llm, &params).await;
    let degraded = result.is_fallback();
    if degraded {
        warn!("roadmap degraded to empty for category {}", params.category_id);
    }

    Ok(Json(RoadmapResponse {
        levels: result.into_inner(),
        degraded,
    }))
}
