//! Achievement definitions
//!
//! Display-only badges referenced by id from the profile. The engine never
//! unlocks these at runtime; they are seeded onto the profile.

/// A single achievement definition
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Display icon name
    pub icon: &'static str,
}

pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "ach1",
        title: "Early Bird",
        description: "Joined during launch week",
        icon: "star",
    },
    AchievementDef {
        id: "ach2",
        title: "Quest Hunter",
        description: "Completed 10 daily quests",
        icon: "target",
    },
    AchievementDef {
        id: "ach3",
        title: "Social Butterfly",
        description: "Sent 100 messages in chat",
        icon: "message-square",
    },
    AchievementDef {
        id: "ach4",
        title: "High Roller",
        description: "Earned 5000 Mom3ntum Points",
        icon: "zap",
    },
    AchievementDef {
        id: "ach5",
        title: "Music Maestro",
        description: "Streamed 100 hours of music",
        icon: "music",
    },
    AchievementDef {
        id: "ach6",
        title: "FVT Holder",
        description: "Held a Face Value Ticket",
        icon: "gift",
    },
    AchievementDef {
        id: "ach7",
        title: "Streak Master",
        description: "Reached a 30 day streak",
        icon: "trophy",
    },
    AchievementDef {
        id: "ach8",
        title: "Event Regular",
        description: "RSVPd to 5 events",
        icon: "calendar",
    },
];

impl AchievementDef {
    /// Look up a definition by id
    pub fn get(id: &str) -> Option<&'static AchievementDef> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }
}
