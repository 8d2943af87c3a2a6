//! Starter quest board and the demo profile

use chrono::TimeZone;
use chrono::Utc;

use crate::domain::{Activity, ActivityKind, Profile, Quest, QuestCategory};

fn quest(
    id: &str,
    title: &str,
    description: &str,
    reward_xp: u64,
    reward_points: u64,
    category: QuestCategory,
    completed: bool,
    progress: u32,
    total: u32,
    link: Option<&str>,
) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        reward_xp,
        reward_points,
        category,
        completed,
        progress,
        total,
        link: link.map(str::to_string),
    }
}

/// The quest board a new season starts with
pub fn starter_quests() -> Vec<Quest> {
    use QuestCategory::*;
    vec![
        quest(
            "q1",
            "Daily Pulse",
            "Log in to Mom3ntum today.",
            50,
            10,
            Daily,
            true,
            1,
            1,
            Some("#"),
        ),
        quest(
            "q2",
            "Refer 3 Friends",
            "Invite friends to join Mom3ntum.",
            500,
            200,
            Weekly,
            false,
            2,
            3,
            Some("internal:profile"),
        ),
        quest(
            "q3",
            "Game Master",
            "Play 5 mini-games in the Arcade.",
            300,
            100,
            Weekly,
            false,
            1,
            5,
            Some("internal:arcade"),
        ),
        quest(
            "q4",
            "Social Butterfly",
            "Post 10 messages in community chat.",
            200,
            50,
            Weekly,
            false,
            3,
            10,
            Some("internal:social"),
        ),
        quest(
            "q5",
            "Read Article",
            "Read \"The Future of Fandom\" in the news section.",
            50,
            20,
            Daily,
            false,
            0,
            1,
            Some("https://medium.com"),
        ),
        quest(
            "q6",
            "Take Quiz",
            "Test your knowledge on the latest article.",
            100,
            50,
            Daily,
            false,
            0,
            1,
            Some("internal:arcade"),
        ),
        quest(
            "q7",
            "Create Content",
            "Post a reaction video to the new single.",
            500,
            250,
            Weekly,
            false,
            0,
            1,
            Some("#"),
        ),
        quest(
            "q8",
            "Join Discord",
            "Connect with the community on Discord.",
            200,
            100,
            OneTime,
            false,
            0,
            1,
            Some("https://discord.com"),
        ),
    ]
}

/// The seeded demo profile used by the interactive session
pub fn demo_profile() -> Profile {
    let mut profile = Profile::new("AlexFan_22", "alex_fandom");
    profile.id = "u1".to_string();
    profile.avatar = "https://picsum.photos/200".to_string();
    profile.bio =
        "Music addict, weekend gamer, and full-time dreamer. Trying to collect every badge!"
            .to_string();
    profile.level = 12;
    profile.xp = 2_750;
    profile.xp_cap = 3_000;
    profile.points = 14_500;
    profile.tickets = 1;
    profile.achievements = vec!["ach1".to_string(), "ach2".to_string()];
    profile.joined = Utc
        .with_ymd_and_hms(2025, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    profile.quests_completed = 42;
    profile.total_xp_earned = 15_400;
    profile.total_points_earned = 16_200;
    profile.current_streak = 5;
    profile.referral_count = 2;
    profile.referral_code = "ALEX2025".to_string();
    profile.activity = vec![
        Activity::new(
            ActivityKind::Quest,
            "Completed \"Daily Pulse\"",
            Some("50 XP".to_string()),
        ),
        Activity::new(ActivityKind::Social, "Joined #music channel", None),
        Activity::new(
            ActivityKind::Game,
            "Won 100 Mom3ntum Pts in Daily Spin",
            Some("100 MP".to_string()),
        ),
    ];
    profile
}
