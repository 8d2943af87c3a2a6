//! Rewards arcade: the daily spin wheel and the points store
//!
//! One sampled [`WheelSegment`] is both the outcome shown to the user and
//! the value the engine credits, so the wheel can never display a prize it
//! does not pay out.

use rand::Rng;

/// One slice of the spin wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSegment {
    pub label: &'static str,
    pub points: u64,
    pub xp: u64,
}

/// The six wheel slices, equal odds each
pub static WHEEL_SEGMENTS: &[WheelSegment] = &[
    WheelSegment {
        label: "50 Pts",
        points: 50,
        xp: 0,
    },
    WheelSegment {
        label: "100 XP",
        points: 0,
        xp: 100,
    },
    WheelSegment {
        label: "200 Pts",
        points: 200,
        xp: 0,
    },
    WheelSegment {
        label: "Try Again",
        points: 0,
        xp: 0,
    },
    WheelSegment {
        label: "500 Pts",
        points: 500,
        xp: 0,
    },
    WheelSegment {
        label: "10 XP",
        points: 0,
        xp: 10,
    },
];

/// Sample one wheel segment uniformly
pub fn spin<R: Rng + ?Sized>(rng: &mut R) -> &'static WheelSegment {
    &WHEEL_SEGMENTS[rng.gen_range(0..WHEEL_SEGMENTS.len())]
}

/// What an arcade store purchase buys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreItemKind {
    /// One entry into a prize raffle
    Raffle,
    /// A right-to-buy reservation (e.g. presale access)
    Access,
    /// A digital collectible delivered immediately
    Drop,
}

impl StoreItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raffle => "raffle",
            Self::Access => "access",
            Self::Drop => "drop",
        }
    }
}

/// An item purchasable with points in the arcade store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: StoreItemKind,
    pub cost: u64,
}
