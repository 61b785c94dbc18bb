//! Curriculum data types — the shapes the roadmap and exam schemas constrain
//! the model to. The declared response schema is the only shape enforcement;
//! these types mirror it exactly so decoding doubles as validation.

use serde::{Deserialize, Serialize};

/// Kind of supplementary learning material attached to a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Article,
    Video,
    Tool,
}

/// A generated pointer to supplementary material. Each lesson carries
/// exactly two of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub url: String,
}

/// A four-option quiz with a single correct index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct: u32,
}

/// One lesson inside a level. `unlocked` is not in the schema's required
/// list, so it defaults when the model omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub unlocked: bool,
    pub resources: Vec<Resource>,
    pub quiz: Quiz,
}

/// One level of a roadmap. A full roadmap is exactly three of these,
/// two lessons each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub lessons: Vec<Lesson>,
}
