//! Axum route handlers for the Advice API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advice::financial_advice;
use crate::errors::AppError;
use crate::models::advice::{FinancialAdvice, Transaction};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: FinancialAdvice,
    /// True when the fixed fallback was substituted for a failed generation.
    pub degraded: bool,
}

/// POST /api/v1/advice
///
/// Generates budgeting advice from the caller's transaction history.
/// Generation failure is never an HTTP error; the response carries the
/// fallback advice with `degraded: true` instead.
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    if request.transactions.is_empty() {
        return Err(AppError::Validation(
            "transactions cannot be empty".to_string(),
        ));
    }

    let result = financial_advice(&state.llm, &request.transactions).await;
    let degraded = result.is_fallback();
    if degraded {
        warn!(
            "advice degraded to fallback for {} transactions",
            request.transactions.len()
        );
    }

    Ok(Json(AdviceResponse {
        advice: result.into_inner(),
        degraded,
    }))
}
