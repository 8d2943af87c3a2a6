use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag for an activity feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Quest,
    Achievement,
    Social,
    Game,
    Ticket,
    Reward,
}

impl ActivityKind {
    /// Short string form for display and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quest => "quest",
            Self::Achievement => "achievement",
            Self::Social => "social",
            Self::Game => "game",
            Self::Ticket => "ticket",
            Self::Reward => "reward",
        }
    }
}

/// Immutable entry in a profile's activity feed.
///
/// Entries are created by every mutating engine operation, never edited or
/// removed, and kept most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// Display label for whatever was granted (e.g. "+100 MP"), if anything
    pub reward: Option<String>,
}

impl Activity {
    /// Create a new activity entry timestamped now
    pub fn new(kind: ActivityKind, description: impl Into<String>, reward: Option<String>) -> Self {
        Self {
            id: format!("act-{}", uuid::Uuid::new_v4()),
            kind,
            description: description.into(),
            timestamp: Utc::now(),
            reward,
        }
    }
}
