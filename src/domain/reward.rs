use serde::{Deserialize, Serialize};

/// What a reward actually grants.
///
/// Closed set: amounts for the two currencies and XP, and named cosmetics.
/// Cosmetic payloads carry the asset identifier (badge id, image URL,
/// sticker name) rather than an untyped value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewardKind {
    /// Mom3ntum Points credited to the ledger
    Points { amount: u64 },
    /// XP routed through the progression calculator
    Xp { amount: u64 },
    /// Face Value Tickets, subject to the allowance cap
    Ticket { count: u8 },
    Badge { id: String },
    Avatar { url: String },
    Banner { url: String },
    Sticker { name: String },
}

impl RewardKind {
    /// Display icon associated with each kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Points { .. } => "zap",
            Self::Xp { .. } => "star",
            Self::Ticket { .. } => "ticket",
            Self::Badge { .. } => "shield",
            Self::Avatar { .. } => "user",
            Self::Banner { .. } => "image",
            Self::Sticker { .. } => "sticker",
        }
    }

    /// True for kinds with no ledger/progression effect
    pub fn is_cosmetic(&self) -> bool {
        matches!(
            self,
            Self::Badge { .. } | Self::Avatar { .. } | Self::Banner { .. } | Self::Sticker { .. }
        )
    }
}

/// A claimable reward with its display label (e.g. "500 MP", "Neon Mic Sticker")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
    pub label: String,
}

impl Reward {
    pub fn new(kind: RewardKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}
