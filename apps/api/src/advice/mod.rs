//! Financial advice generation.
//!
//! Flow: serialize transactions into the prompt → one structured-output
//! Gemini call → parse-or-fallback. This operation never errors: any
//! failure substitutes the fixed fallback advice object.

pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::advice::prompts::{advice_schema, ADVICE_PROMPT_TEMPLATE};
use crate::llm_client::{strip_json_fences, GeminiClient, Generated};
use crate::models::advice::{FinancialAdvice, Transaction};

/// Builds the advice prompt with the caller's transaction history inlined.
pub fn build_advice_prompt(transactions: &[Transaction]) -> Result<String, serde_json::Error> {
    let transactions_json = serde_json::to_string(transactions)?;
    Ok(ADVICE_PROMPT_TEMPLATE.replace("{transactions_json}", &transactions_json))
}

/// Decodes a raw model response. Malformed JSON or a shape mismatch yields
/// the documented fallback, never an error.
pub fn parse_advice(text: &str) -> Generated<FinancialAdvice> {
    match serde_json::from_str::<FinancialAdvice>(strip_json_fences(text)) {
        Ok(advice) => Generated::Fresh(advice),
        Err(e) => {
            warn!("advice response did not match schema, using fallback: {e}");
            Generated::Fallback(FinancialAdvice::fallback())
        }
    }
}

/// Generates strategic advice from a transaction history.
///
/// Network failure, API errors, and schema mismatch all collapse into the
/// same fallback path; only the log line distinguishes them.
pub async fn financial_advice(
    llm: &GeminiClient,
    transactions: &[Transaction],
) -> Generated<FinancialAdvice> {
    let prompt = match build_advice_prompt(transactions) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!("failed to serialize transactions for advice prompt: {e}");
            return Generated::Fallback(FinancialAdvice::fallback());
        }
    };

    match llm.generate(&prompt, advice_schema()).await {
        Ok(text) => parse_advice(&text),
        Err(e) => {
            warn!("advice generation call failed, using fallback: {e}");
            Generated::Fallback(FinancialAdvice::fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::advice::Outlook;
    use chrono::NaiveDate;

    fn sample_transactions() -> Vec<Transaction> {
        vec![Transaction {
            id: "t-1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            amount: 499.0,
            description: "Music streaming".to_string(),
            category: "Entertainment".to_string(),
        }]
    }

    #[test]
    fn test_prompt_embeds_serialized_transactions() {
        let prompt = build_advice_prompt(&sample_transactions()).unwrap();
        assert!(prompt.contains("Music streaming"));
        assert!(prompt.contains("\"amount\":499.0"));
        assert!(prompt.contains("Bullish, Bearish, or Neutral"));
        assert!(!prompt.contains("{transactions_json}"));
    }

    #[test]
    fn test_parse_advice_success_fixture() {
        let text = r#"{
            "summary": "Spending is concentrated in subscriptions.",
            "recommendations": ["Cancel unused services", "Set a monthly cap"],
            "outlook": "Bearish"
        }"#;
        let result = parse_advice(text);
        assert!(!result.is_fallback());
        let advice = result.into_inner();
        assert_eq!(advice.outlook, Outlook::Bearish);
        assert_eq!(advice.recommendations.len(), 2);
    }

    #[test]
    fn test_parse_advice_malformed_returns_literal_fallback() {
        let result = parse_advice("I'm sorry, I cannot analyze that.");
        assert!(result.is_fallback());
        assert_eq!(result.into_inner(), FinancialAdvice::fallback());
    }

    #[test]
    fn test_parse_advice_wrong_shape_returns_fallback() {
        // Valid JSON, wrong shape: outlook outside the enum
        let result = parse_advice(r#"{"summary": "x", "recommendations": [], "outlook": "Sideways"}"#);
        assert!(result.is_fallback());
        assert_eq!(result.into_inner(), FinancialAdvice::fallback());
    }

    #[test]
    fn test_parse_advice_tolerates_code_fences() {
        let text = "```json\n{\"summary\": \"ok\", \"recommendations\": [], \"outlook\": \"Neutral\"}\n```";
        assert!(!parse_advice(text).is_fallback());
    }
}
