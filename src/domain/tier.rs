use std::fmt;

use serde::{Deserialize, Serialize};

use super::Reward;

/// Which of a tier's two reward slots is being addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardTrack {
    Free,
    Premium,
}

impl RewardTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for RewardTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim lifecycle of one (tier, track) slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierStatus {
    Locked,
    Unlocked,
    Claimed,
}

/// One rung of the seasonal journey.
///
/// The catalog is static: tiers are never created or destroyed at runtime,
/// only the two `claimed_*` flags mutate.
///
/// `required_xp` is display data carried over from the season definition;
/// the unlock check compares the profile *level* against the tier number,
/// so tier 3 unlocks at level 3 regardless of this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonTier {
    pub tier: u32,
    pub required_xp: u64,
    pub free_reward: Reward,
    pub premium_reward: Reward,
    pub claimed_free: bool,
    pub claimed_premium: bool,
}

impl SeasonTier {
    pub fn reward(&self, track: RewardTrack) -> &Reward {
        match track {
            RewardTrack::Free => &self.free_reward,
            RewardTrack::Premium => &self.premium_reward,
        }
    }

    pub fn is_claimed(&self, track: RewardTrack) -> bool {
        match track {
            RewardTrack::Free => self.claimed_free,
            RewardTrack::Premium => self.claimed_premium,
        }
    }

    pub fn set_claimed(&mut self, track: RewardTrack) {
        match track {
            RewardTrack::Free => self.claimed_free = true,
            RewardTrack::Premium => self.claimed_premium = true,
        }
    }
}
