use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Activity, ActivityKind};

/// XP required to advance out of level 1 for a fresh profile
pub(crate) const BASE_XP_CAP: u64 = 1_000;

/// The single user profile the engine mutates.
///
/// Identity fields and the cumulative counters are never read back by engine
/// logic; they exist for display and audit. The progression and economy
/// fields are owned exclusively by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub bio: String,

    // Progression
    pub level: u32,
    pub xp: u64,
    /// XP required to advance from `level` to `level + 1`
    pub xp_cap: u64,

    // Economy
    /// Mom3ntum Points (MP), the soft currency
    pub points: u64,
    /// Face Value Tickets held (hard-capped at 5)
    pub tickets: u8,

    /// Gates the premium reward track of the seasonal journey
    pub premium: bool,

    /// Unlocked achievement ids (display only)
    pub achievements: Vec<String>,
    pub joined: DateTime<Utc>,

    // Cumulative audit counters (monotone, never read back by logic)
    pub quests_completed: u32,
    pub total_xp_earned: u64,
    pub total_points_earned: u64,

    // Social/display fields carried on the profile but inert to the engine
    pub current_streak: u32,
    pub referral_count: u32,
    pub referral_code: String,

    /// Most-recent-first, append-only activity feed
    pub activity: Vec<Activity>,
}

impl Profile {
    /// Create a fresh level-1 profile with empty economy
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: format!("u-{}", uuid::Uuid::new_v4()),
            name: name.into(),
            handle: handle.into(),
            avatar: String::new(),
            bio: String::new(),
            level: 1,
            xp: 0,
            xp_cap: BASE_XP_CAP,
            points: 0,
            tickets: 0,
            premium: false,
            achievements: Vec::new(),
            joined: Utc::now(),
            quests_completed: 0,
            total_xp_earned: 0,
            total_points_earned: 0,
            current_streak: 0,
            referral_count: 0,
            referral_code: String::new(),
            activity: Vec::new(),
        }
    }

    /// Prepend an activity entry (the feed is most-recent-first)
    pub fn record(&mut self, kind: ActivityKind, description: impl Into<String>, reward: Option<String>) {
        self.activity.insert(0, Activity::new(kind, description, reward));
    }

    /// Progress toward the next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        if self.xp_cap == 0 {
            return 1.0;
        }
        (self.xp as f32) / (self.xp_cap as f32)
    }
}
