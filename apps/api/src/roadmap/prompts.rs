// Prompt template and response schema for roadmap generation.
// The schema mirrors models::learning exactly; decode against those types
// is the only shape enforcement.

use serde_json::{json, Value};

use crate::models::progress::RankTier;

/// Roadmap prompt template.
/// Replace: {category_id}, {target_language}, {user_rank}, {source_material},
///          {tier_guidance}, {quiz_guidance}, {level1}, {level2}, {level3}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a highly structured financial learning roadmap for the category ID: "{category_id}".
Target Language: {target_language}.
Current User Rank: {user_rank}.

SOURCE MATERIAL (GROUND TRUTH):
{source_material}

INSTRUCTIONS:
1. Base all lesson content on the SOURCE MATERIAL provided above.
2. CRITICAL: ADJUST COMPLEXITY BASED ON RANK ("{user_rank}"):
   {tier_guidance}

3. Structure:
   - Create exactly 3 Levels.
   - Level 1 covers: {level1}
   - Level 2 covers: {level2}
   - Level 3 covers: {level3}
   - Each Level must have exactly 2 Lessons.

4. Quiz Rules:
   {quiz_guidance}

5. Resources: Provide 2 real-world resource titles (Articles/Tools) for each lesson."#;

/// Rank-scaled complexity instructions inserted into the roadmap prompt.
pub fn tier_guidance(tier: RankTier) -> &'static str {
    match tier {
        RankTier::Beginner => {
            "Simplify the source material. Focus on \"What\" and \"Why\". \
             Use simple analogies. Keep it foundational."
        }
        RankTier::Intermediate => {
            "Use the source material as a base but EXPAND on \"How\". \
             Discuss optimization, nuances, and common mistakes mentioned in the text."
        }
        RankTier::Expert => {
            "The source material is just a starting point. EXPAND SIGNIFICANTLY \
             with advanced strategies, leverage, risk/reward ratios, and \
             macro-economic implications related to these topics. Make it challenging."
        }
    }
}

/// Rank-scaled question-style instructions for lesson quizzes.
pub fn quiz_guidance(tier: RankTier) -> &'static str {
    match tier {
        RankTier::Beginner => "Direct questions from the text.",
        RankTier::Intermediate => {
            "Mix direct questions with situational choices that apply the text."
        }
        RankTier::Expert => "Scenario-based questions that require application of the concept.",
    }
}

/// Structured-output schema for the Level array.
pub fn roadmap_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "title": { "type": "STRING" },
                "lessons": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "id": { "type": "STRING" },
                            "title": { "type": "STRING" },
                            "content": { "type": "STRING" },
                            "unlocked": { "type": "BOOLEAN" },
                            "resources": {
                                "type": "ARRAY",
                                "items": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "title": { "type": "STRING" },
                                        "type": { "type": "STRING", "enum": ["Article", "Video", "Tool"] },
                                        "url": { "type": "STRING" }
                                    },
                                    "required": ["title", "type", "url"]
                                }
                            },
                            "quiz": {
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
                        },
                        "required": ["id", "title", "content", "quiz", "resources"]
                    }
                }
            },
            "required": ["id", "title", "lessons"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_schema_lesson_required_list_omits_unlocked() {
        let schema = roadmap_schema();
        let required = schema["items"]["properties"]["lessons"]["items"]["required"]
            .as_array()
            .unwrap();
        let names: Vec<&str> = required.iter().map(|v| v.as_str().unwrap()).collect();
        assert!(names.contains(&"quiz"));
        assert!(names.contains(&"resources"));
        assert!(!names.contains(&"unlocked"));
    }

    #[test]
    fn test_tier_guidance_scales_with_rank() {
        assert!(tier_guidance(RankTier::Beginner).contains("foundational"));
        assert!(tier_guidance(RankTier::Intermediate).contains("common mistakes"));
        assert!(tier_guidance(RankTier::Expert).contains("advanced strategies"));
    }
}
