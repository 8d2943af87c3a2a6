use serde::{Deserialize, Serialize};

/// How often (or whether) a quest recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestCategory {
    Daily,
    Weekly,
    Seasonal,
    OneTime,
    /// Produced by the quest-generation collaborator
    Generated,
}

impl QuestCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Seasonal => "seasonal",
            Self::OneTime => "one-time",
            Self::Generated => "generated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "seasonal" => Some(Self::Seasonal),
            "one-time" => Some(Self::OneTime),
            "generated" => Some(Self::Generated),
            _ => None,
        }
    }
}

/// A task the user can complete for XP and points.
///
/// Quests are created at catalog load or merged in from the generation
/// collaborator, mutated exactly once on completion, and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward_xp: u64,
    pub reward_points: u64,
    pub category: QuestCategory,
    /// One-way false -> true; the engine rejects a second completion
    pub completed: bool,
    pub progress: u32,
    pub total: u32,
    /// Optional destination the quest points at (URL or internal view name)
    pub link: Option<String>,
}

impl Quest {
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
