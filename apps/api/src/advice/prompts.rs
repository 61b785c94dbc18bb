// Prompt template and response schema for the advice operation.
// Each operation that needs LLM calls defines its own prompts.rs alongside it.

use serde_json::{json, Value};

/// Advice prompt template. Replace `{transactions_json}` before sending.
pub const ADVICE_PROMPT_TEMPLATE: &str = r#"Analyze the following financial transaction history and provide strategic financial advice.

Transactions: {transactions_json}

Provide a concise summary, a list of actionable recommendations, and a market/personal outlook (Bullish, Bearish, or Neutral)."#;

/// Structured-output schema for one advice object.
pub fn advice_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "outlook": {
                "type": "STRING",
                "enum": ["Bullish", "Bearish", "Neutral"]
            }
        },
        "required": ["summary", "recommendations", "outlook"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_schema_requires_all_fields() {
        let schema = advice_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        assert_eq!(schema["properties"]["outlook"]["enum"].as_array().unwrap().len(), 3);
    }
}
