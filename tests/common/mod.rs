//! Shared test utilities for engine integration tests

use mom3ntum::catalog::{season_tiers, starter_quests};
use mom3ntum::domain::{Profile, Quest, QuestCategory};
use mom3ntum::engine::Engine;

/// Build a profile with explicit progression/economy values
pub fn profile_with(level: u32, xp: u64, xp_cap: u64, points: u64) -> Profile {
    let mut profile = Profile::new("Test Fan", "test_fan");
    profile.level = level;
    profile.xp = xp;
    profile.xp_cap = xp_cap;
    profile.points = points;
    profile
}

/// Engine over the given profile and the standard catalogs
pub fn engine_with(profile: Profile) -> Engine {
    Engine::new(profile, starter_quests(), season_tiers())
}

/// A one-off quest with the given rewards, not yet completed
pub fn quest_with(id: &str, reward_xp: u64, reward_points: u64) -> Quest {
    Quest {
        id: id.to_string(),
        title: format!("Quest {id}"),
        description: String::new(),
        reward_xp,
        reward_points,
        category: QuestCategory::Daily,
        completed: false,
        progress: 0,
        total: 1,
        link: None,
    }
}
