use crate::domain::RewardTrack;

/// State changes reported back to the caller after a successful mutation.
///
/// One engine operation can emit several events (completing a quest can
/// award XP, trigger a level up, and credit points at once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    XpAwarded {
        amount: u64,
    },
    LevelUp {
        old_level: u32,
        new_level: u32,
        new_xp_cap: u64,
    },
    PointsEarned {
        amount: u64,
    },
    PointsSpent {
        amount: u64,
    },
    TicketsGranted {
        count: u8,
        held: u8,
    },
    QuestCompleted {
        id: String,
        title: String,
    },
    RewardClaimed {
        tier: u32,
        track: RewardTrack,
        label: String,
    },
    QuestsAdded {
        count: usize,
    },
}
