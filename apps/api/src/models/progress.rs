#![allow(dead_code)]

//! Learner progression — the fixed rank ladder that scales generated
//! difficulty, and the accumulated user state the frontend persists.
//!
//! Persistence is external to this service; these types define the wire
//! shape (camelCase, matching the frontend's stored JSON) and the small
//! set of mutations UI actions perform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full rank ladder, in promotion order.
pub const RANKS: &[&str] = &[
    "Beginner I",
    "Beginner II",
    "Beginner III",
    "Intermediate I",
    "Intermediate II",
    "Intermediate III",
    "Expert",
    "Grandmaster",
];

/// Difficulty tier derived from a rank label. Drives the complexity
/// instructions in roadmap and exam prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Beginner,
    Intermediate,
    Expert,
}

impl RankTier {
    /// Derives the tier from a rank label. Labels outside the ladder are
    /// treated as Beginner so generation stays foundational rather than
    /// failing.
    pub fn for_rank(rank: &str) -> Self {
        let rank = rank.trim();
        if rank.starts_with("Intermediate") {
            RankTier::Intermediate
        } else if rank.starts_with("Expert") || rank.starts_with("Grandmaster") {
            RankTier::Expert
        } else {
            RankTier::Beginner
        }
    }
}

/// An in-app notification shown to the learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

/// Accumulated learner state. Mutated by UI actions as the learner
/// progresses; stored by the frontend, not by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Global history of all completed lesson ids.
    pub completed_lesson_ids: Vec<String>,
    pub xp: u64,
    pub badges: Vec<String>,
    /// Index into [`RANKS`].
    pub rank_index: usize,
    /// Category ids completed while at the current rank. Cleared on promotion.
    pub completed_categories_for_current_rank: Vec<String>,
    pub language: String,
    /// Ids of cosmetic items bought in the store.
    pub inventory: Vec<String>,
    pub equipped_banner: Option<String>,
    pub equipped_music: String,
    pub unlocked_music: Vec<String>,
    pub notifications: Vec<Notification>,
}

impl UserProgress {
    pub fn new() -> Self {
        UserProgress {
            completed_lesson_ids: Vec::new(),
            xp: 0,
            badges: Vec::new(),
            rank_index: 0,
            completed_categories_for_current_rank: Vec::new(),
            language: "en".to_string(),
            inventory: Vec::new(),
            equipped_banner: None,
            equipped_music: "default".to_string(),
            unlocked_music: vec!["default".to_string()],
            notifications: Vec::new(),
        }
    }

    /// Current rank label for prompt construction.
    pub fn rank(&self) -> &'static str {
        RANKS[self.rank_index.min(RANKS.len() - 1)]
    }

    /// Records a completed lesson and awards XP. Returns false if the
    /// lesson was already complete (no double XP).
    pub fn complete_lesson(&mut self, lesson_id: &str, xp: u64) -> bool {
        if self.completed_lesson_ids.iter().any(|id| id == lesson_id) {
            return false;
        }
        self.completed_lesson_ids.push(lesson_id.to_string());
        self.xp += xp;
        true
    }

    /// Marks a category finished at the current rank.
    pub fn complete_category(&mut self, category_id: &str) {
        if !self
            .completed_categories_for_current_rank
            .iter()
            .any(|id| id == category_id)
        {
            self.completed_categories_for_current_rank
                .push(category_id.to_string());
        }
    }

    /// Promotes to the next rank after a passed rank exam. Per-rank category
    /// progress resets; the top rank is a ceiling, not an error.
    pub fn advance_rank(&mut self) {
        if self.rank_index + 1 < RANKS.len() {
            self.rank_index += 1;
        }
        self.completed_categories_for_current_rank.clear();
    }

    pub fn push_notification(&mut self, title: &str, message: &str) {
        self.notifications.push(Notification {
            id: Uuid::new_v4(),
            title: title.to_string(),
            message: message.to_string(),
            date: Utc::now(),
            read: false,
        });
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_for_each_ladder_rank() {
        assert_eq!(RankTier::for_rank("Beginner I"), RankTier::Beginner);
        assert_eq!(RankTier::for_rank("Beginner III"), RankTier::Beginner);
        assert_eq!(RankTier::for_rank("Intermediate II"), RankTier::Intermediate);
        assert_eq!(RankTier::for_rank("Expert"), RankTier::Expert);
        assert_eq!(RankTier::for_rank("Grandmaster"), RankTier::Expert);
    }

    #[test]
    fn test_tier_for_unknown_rank_is_beginner() {
        assert_eq!(RankTier::for_rank("Wizard IV"), RankTier::Beginner);
        assert_eq!(RankTier::for_rank(""), RankTier::Beginner);
    }

    #[test]
    fn test_complete_lesson_awards_xp_once() {
        let mut progress = UserProgress::new();
        assert!(progress.complete_lesson("1-1", 50));
        assert!(!progress.complete_lesson("1-1", 50));
        assert_eq!(progress.xp, 50);
        assert_eq!(progress.completed_lesson_ids.len(), 1);
    }

    #[test]
    fn test_advance_rank_resets_category_progress_and_caps() {
        let mut progress = UserProgress::new();
        progress.complete_category("banking");
        progress.advance_rank();
        assert_eq!(progress.rank_index, 1);
        assert!(progress.completed_categories_for_current_rank.is_empty());

        progress.rank_index = RANKS.len() - 1;
        progress.advance_rank();
        assert_eq!(progress.rank(), "Grandmaster");
    }

    #[test]
    fn test_progress_serializes_camel_case() {
        let progress = UserProgress::new();
        let value = serde_json::to_value(&progress).unwrap();
        assert!(value.get("completedLessonIds").is_some());
        assert!(value.get("rankIndex").is_some());
        assert!(value.get("equippedBanner").is_some());
    }
}
