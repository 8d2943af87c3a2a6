//! Season tier track definitions

use crate::domain::{Reward, RewardKind, SeasonTier};

fn tier(n: u32, required_xp: u64, free: Reward, premium: Reward) -> SeasonTier {
    SeasonTier {
        tier: n,
        required_xp,
        free_reward: free,
        premium_reward: premium,
        claimed_free: false,
        claimed_premium: false,
    }
}

fn points(amount: u64) -> Reward {
    Reward::new(RewardKind::Points { amount }, format!("{amount} MP"))
}

fn xp(amount: u64) -> Reward {
    Reward::new(RewardKind::Xp { amount }, format!("{amount} XP"))
}

/// The ten tiers of the current season, both reward tracks unclaimed
pub fn season_tiers() -> Vec<SeasonTier> {
    vec![
        tier(
            1,
            1_000,
            points(100),
            Reward::new(
                RewardKind::Sticker {
                    name: "Neon Mic".to_string(),
                },
                "Neon Mic Sticker",
            ),
        ),
        tier(
            2,
            2_000,
            xp(250),
            Reward::new(
                RewardKind::Avatar {
                    url: "https://picsum.photos/200?random=20".to_string(),
                },
                "Cyber Punk Avatar",
            ),
        ),
        tier(
            3,
            3_000,
            Reward::new(
                RewardKind::Sticker {
                    name: "Cool Cat".to_string(),
                },
                "Cool Cat Sticker",
            ),
            points(500),
        ),
        tier(
            4,
            4_000,
            points(200),
            Reward::new(
                RewardKind::Badge {
                    id: "VIP_S4".to_string(),
                },
                "Season 4 VIP Badge",
            ),
        ),
        tier(
            5,
            5_000,
            Reward::new(
                RewardKind::Banner {
                    url: "https://picsum.photos/800/200?random=1".to_string(),
                },
                "Sunset Banner",
            ),
            xp(1_000),
        ),
        tier(
            6,
            6_000,
            points(300),
            Reward::new(RewardKind::Ticket { count: 1 }, "1 Face Value Ticket"),
        ),
        tier(
            7,
            7_000,
            Reward::new(
                RewardKind::Badge {
                    id: "Explorer".to_string(),
                },
                "Explorer Badge",
            ),
            points(1_500),
        ),
        tier(
            8,
            8_000,
            xp(500),
            Reward::new(
                RewardKind::Banner {
                    url: "https://picsum.photos/800/200?random=2".to_string(),
                },
                "Gold Tier Banner",
            ),
        ),
        tier(
            9,
            9_000,
            points(500),
            Reward::new(
                RewardKind::Avatar {
                    url: "https://picsum.photos/200?random=21".to_string(),
                },
                "Legendary Avatar",
            ),
        ),
        tier(
            10,
            10_000,
            Reward::new(
                RewardKind::Badge {
                    id: "Season_Master".to_string(),
                },
                "Season Master",
            ),
            points(5_000),
        ),
    ]
}
