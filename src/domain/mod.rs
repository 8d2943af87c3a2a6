//! Core domain types for Mom3ntum

mod activity;
mod profile;
mod quest;
mod reward;
mod tier;

pub use activity::{Activity, ActivityKind};
pub use profile::Profile;
pub use quest::{Quest, QuestCategory};
pub use reward::{Reward, RewardKind};
pub use tier::{RewardTrack, SeasonTier, TierStatus};
