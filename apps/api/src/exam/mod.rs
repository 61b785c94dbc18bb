//! Rank exam generation — five questions spanning the six fixed subject
//! areas, difficulty-scaled to the rank the learner is graduating from.
//!
//! Same parse-or-fallback contract as roadmap generation: any failure yields
//! an empty question list, never an error.

pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::exam::prompts::{exam_schema, rank_guidance, EXAM_PROMPT_TEMPLATE};
use crate::language;
use crate::llm_client::{strip_json_fences, GeminiClient, Generated};
use crate::models::learning::Quiz;
use crate::models::progress::RankTier;

/// Builds the exam prompt for a rank and target language.
pub fn build_exam_prompt(current_rank: &str, language_code: &str) -> String {
    let tier = RankTier::for_rank(current_rank);
    EXAM_PROMPT_TEMPLATE
        .replace("{current_rank}", current_rank)
        .replace("{target_language}", language::display_name(language_code))
        .replace("{rank_guidance}", rank_guidance(tier))
}

/// Decodes a raw model response into quizzes. Any mismatch yields an empty
/// list, never an error.
pub fn parse_exam(text: &str) -> Generated<Vec<Quiz>> {
    match serde_json::from_str::<Vec<Quiz>>(strip_json_fences(text)) {
        Ok(questions) => Generated::Fresh(questions),
        Err(e) => {
            warn!("exam response did not match schema, returning empty: {e}");
            Generated::Fallback(Vec::new())
        }
    }
}

/// Generates a rank graduation exam.
pub async fn rank_exam(
    llm: &GeminiClient,
    current_rank: &str,
    language_code: &str,
) -> Generated<Vec<Quiz>> {
    let prompt = build_exam_prompt(current_rank, language_code);

    match llm.generate(&prompt, exam_schema()).await {
        Ok(text) => parse_exam(&text),
        Err(e) => {
            warn!("exam generation call failed for rank {current_rank}: {e}");
            Generated::Fallback(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::prompts::EXAM_QUESTION_COUNT;
    use serde_json::json;

    /// A well-formed exam fixture: 5 questions, 4 options, correct in [0,3].
    fn exam_fixture() -> String {
        let questions: Vec<_> = (0..EXAM_QUESTION_COUNT)
            .map(|i| {
                json!({
                    "question": format!("Question {i}?"),
                    "options": ["A", "B", "C", "D"],
                    "correct": i % 4
                })
            })
            .collect();
        serde_json::to_string(&questions).unwrap()
    }

    #[test]
    fn test_successful_exam_has_required_shape() {
        let result = parse_exam(&exam_fixture());
        assert!(!result.is_fallback());

        let questions = result.into_inner();
        assert_eq!(questions.len(), EXAM_QUESTION_COUNT);
        for quiz in &questions {
            assert_eq!(quiz.options.len(), 4);
            assert!(quiz.correct <= 3);
        }
    }

    #[test]
    fn test_malformed_exam_returns_empty_list() {
        let result = parse_exam("### Exam\n1. What is money?");
        assert!(result.is_fallback());
        assert!(result.into_inner().is_empty());
    }

    #[test]
    fn test_prompt_names_rank_and_language() {
        let prompt = build_exam_prompt("Intermediate II", "ta");
        assert!(prompt.contains("graduate from rank \"Intermediate II\""));
        assert!(prompt.contains("Language: Tamil."));
        assert!(prompt.contains("calculation logic"));
    }

    #[test]
    fn test_prompt_covers_all_six_subject_areas() {
        let prompt = build_exam_prompt("Beginner I", "en");
        for area in [
            "Money Basics",
            "Banking",
            "Digital Payments",
            "Investing",
            "Loans",
            "Safety",
        ] {
            assert!(prompt.contains(area), "prompt must name {area}");
        }
    }

    #[test]
    fn test_unsupported_language_defaults_to_english() {
        let prompt = build_exam_prompt("Expert", "xx");
        assert!(prompt.contains("Language: English."));
    }
}
