//! Axum route handlers for the Exam API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::exam::rank_exam;
use crate::models::learning::Quiz;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRequest {
    pub current_rank: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize)]
pub struct ExamResponse {
    pub questions: Vec<Quiz>,
    /// True when generation failed and the empty fallback was substituted.
    pub degraded: bool,
}

/// POST /api/v1/exam
///
/// Generates a 5-question rank graduation exam. An empty `questions` list
/// with `degraded: true` means generation failed.
pub async fn handle_exam(
    State(state): State<AppState>,
    Json(request): Json<ExamRequest>,
) -> Result<Json<ExamResponse>, AppError> {
    if request.current_rank.trim().is_empty() {
        return Err(AppError::Validation(
            "currentRank cannot be empty".to_string(),
        ));
    }

    let result = rank_exam(&state.llm, &request.current_rank, &request.language).await;
    let degraded = result.is_fallback();
    if degraded {
        warn!("exam degraded to empty for rank {}", request.current_rank);
    }

    Ok(Json(ExamResponse {
        questions: result.into_inner(),
        degraded,
    }))
}
