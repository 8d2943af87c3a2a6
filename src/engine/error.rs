use crate::domain::RewardTrack;

/// Rejection taxonomy for engine operations.
///
/// Every variant is non-fatal: a failed precondition leaves all state
/// unchanged and the caller decides how to surface it. Nothing here should
/// ever abort the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("insufficient points (needed {needed}, available {available})")]
    InsufficientPoints { needed: u64, available: u64 },

    #[error("ticket cap of {cap} already reached")]
    TicketCapReached { cap: u8 },

    #[error("granting {amount} ticket(s) would exceed the cap of {cap}")]
    TicketCapExceeded { amount: u8, cap: u8 },

    #[error("tier {tier} is locked (requires level {required}, current level {current})")]
    TierLocked {
        tier: u32,
        required: u32,
        current: u32,
    },

    #[error("premium pass required to claim the premium track")]
    PremiumRequired,

    #[error("tier {tier} {track} reward already claimed")]
    AlreadyClaimed { tier: u32, track: RewardTrack },

    #[error("quest '{id}' already completed")]
    QuestAlreadyCompleted { id: String },

    #[error("unknown quest '{0}'")]
    UnknownQuest(String),

    #[error("unknown tier {0}")]
    UnknownTier(u32),

    #[error("unknown store item '{0}'")]
    UnknownStoreItem(String),
}
