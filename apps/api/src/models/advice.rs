//! Financial advice types — the advice operation's input (caller-supplied
//! transactions) and output (one generated advice object).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single spending record supplied by the caller. Immutable once created;
/// never generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub category: String,
}

/// One of three fixed sentiment labels attached to generated advice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outlook {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

/// Output of one advice generation call. No mutation after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAdvice {
    pub summary: String,
    pub recommendations: Vec<String>,
    pub outlook: Outlook,
}

impl FinancialAdvice {
    /// The fixed advice returned when generation fails for any reason.
    /// The exact wording is part of the contract with the frontend.
    pub fn fallback() -> Self {
        FinancialAdvice {
            summary: "Strategic adjustment recommended.".to_string(),
            recommendations: vec![
                "Review monthly subscriptions".to_string(),
                "Optimize savings rate".to_string(),
            ],
            outlook: Outlook::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlook_serializes_as_plain_label() {
        assert_eq!(serde_json::to_value(Outlook::Bullish).unwrap(), "Bullish");
        let outlook: Outlook = serde_json::from_str(r#""Bearish""#).unwrap();
        assert_eq!(outlook, Outlook::Bearish);
    }

    #[test]
    fn test_fallback_advice_is_the_documented_constant() {
        let advice = FinancialAdvice::fallback();
        assert_eq!(advice.summary, "Strategic adjustment recommended.");
        assert_eq!(
            advice.recommendations,
            vec!["Review monthly subscriptions", "Optimize savings rate"]
        );
        assert_eq!(advice.outlook, Outlook::Neutral);
    }

    #[test]
    fn test_transaction_deserializes_from_frontend_payload() {
        let json = r#"{
            "id": "t-42",
            "date": "2026-08-01",
            "amount": 1499.0,
            "description": "Streaming subscription",
            "category": "Entertainment"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.category, "Entertainment");
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    }
}
