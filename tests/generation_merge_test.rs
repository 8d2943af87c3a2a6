//! Merging collaborator output into the quest catalog

mod common;

use common::{engine_with, profile_with};
use mom3ntum::domain::QuestCategory;
use mom3ntum::engine::EngineEvent;
use mom3ntum::generate::{fallback_quests, QuestSeed};

#[test]
fn test_fallback_set_merges_as_generated_quests() {
    let mut engine = engine_with(profile_with(1, 0, 1_000, 0));
    let board_before = engine.quests().len();

    let events = engine.add_generated_quests(fallback_quests());
    assert_eq!(events, vec![EngineEvent::QuestsAdded { count: 2 }]);

    let quests = engine.quests();
    assert_eq!(quests.len(), board_before + 2);
    let added = &quests[board_before..];
    for quest in added {
        assert_eq!(quest.category, QuestCategory::Generated);
        assert!(!quest.completed);
        assert_eq!(quest.progress, 0);
        assert!(quest.total >= 1);
        assert!(quest.id.starts_with("gen-"));
    }
    assert_eq!(added[0].title, "Stream Team");
    assert_eq!(added[1].title, "Super Fan");
}

#[test]
fn test_generated_quest_ids_are_unique() {
    let mut engine = engine_with(profile_with(1, 0, 1_000, 0));
    engine.add_generated_quests(fallback_quests());
    engine.add_generated_quests(fallback_quests());

    let mut ids: Vec<&str> = engine.quests().iter().map(|q| q.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), engine.quests().len());
}

#[test]
fn test_generated_quest_pays_out_like_any_other() {
    let mut engine = engine_with(profile_with(1, 0, 1_000, 0));
    engine.add_generated_quests(vec![QuestSeed {
        title: "Encore Chant".to_string(),
        description: "Start the encore chant at tonight's show.".to_string(),
        reward_xp: 300,
        reward_points: 120,
        total: 1,
    }]);

    let id = engine
        .quests()
        .iter()
        .find(|q| q.category == QuestCategory::Generated)
        .map(|q| q.id.clone())
        .expect("generated quest present");

    engine.complete_quest(&id).expect("completes normally");
    assert_eq!(engine.profile().points, 120);
    assert_eq!(engine.profile().xp, 300);
    assert_eq!(engine.profile().quests_completed, 1);
}

#[test]
fn test_zero_total_is_normalized_to_one() {
    let mut engine = engine_with(profile_with(1, 0, 1_000, 0));
    engine.add_generated_quests(vec![QuestSeed {
        title: "T".to_string(),
        description: "D".to_string(),
        reward_xp: 10,
        reward_points: 5,
        total: 0,
    }]);
    let quest = engine.quests().last().expect("added");
    assert_eq!(quest.total, 1);
}
