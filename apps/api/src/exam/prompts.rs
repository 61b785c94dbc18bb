#![allow(dead_code)]

// Prompt template and response schema for rank exam generation.

use serde_json::{json, Value};

use crate::models::progress::RankTier;

/// Number of questions in every rank exam.
pub const EXAM_QUESTION_COUNT: usize = 5;

/// Exam prompt template.
/// Replace: {current_rank}, {target_language}, {rank_guidance}
pub const EXAM_PROMPT_TEMPLATE: &str = r#"Create a comprehensive 5-question Exam to test if a user is ready to graduate from rank "{current_rank}" in financial literacy.
Language: {target_language}.

The questions should cover a mix of topics: Money Basics, Banking, Digital Payments, Investing, Loans, and Safety.

Guidelines:
- Questions must be strictly appropriate for the difficulty of "{current_rank}".
- {rank_guidance}
- Return exactly 5 questions.
- Each question has 4 options and 1 correct index."#;

/// Rank-scaled difficulty instruction for exam questions.
pub fn rank_guidance(tier: RankTier) -> &'static str {
    match tier {
        RankTier::Beginner => "Focus on definitions and basic rules.",
        RankTier::Intermediate => "Focus on calculation logic and situational choices.",
        RankTier::Expert => "Focus on complex scenarios, tax implications, and portfolio strategy.",
    }
}

/// Structured-output schema for the Quiz array.
pub fn exam_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "correct": { "type": "INTEGER" }
            },
            "required": ["question", "options", "correct"]
        }
    })
}
