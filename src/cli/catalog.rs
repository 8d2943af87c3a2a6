//! One-shot dump of the static catalogs

use anyhow::Result;

use mom3ntum::arcade::WHEEL_SEGMENTS;
use mom3ntum::catalog::{season_tiers, starter_quests, ACHIEVEMENTS, STORE_ITEMS};

pub fn catalog_command() -> Result<()> {
    println!("Quests");
    println!("------");
    for quest in starter_quests() {
        println!(
            "  {:<4} [{:<9}] {:<20} +{} XP, +{} MP ({}/{})",
            quest.id,
            quest.category.as_str(),
            quest.title,
            quest.reward_xp,
            quest.reward_points,
            quest.progress,
            quest.total,
        );
    }

    println!();
    println!("Seasonal Journey");
    println!("----------------");
    for tier in season_tiers() {
        println!(
            "  Tier {:>2}  free: {:<22} premium: {}",
            tier.tier, tier.free_reward.label, tier.premium_reward.label,
        );
    }

    println!();
    println!("Arcade Store");
    println!("------------");
    for item in STORE_ITEMS {
        println!(
            "  {:<3} {:<26} {:>5} Pts  ({})",
            item.id,
            item.title,
            item.cost,
            item.kind.as_str(),
        );
    }

    println!();
    println!("Spin Wheel");
    println!("----------");
    for segment in WHEEL_SEGMENTS {
        println!("  {}", segment.label);
    }

    println!();
    println!("Achievements");
    println!("------------");
    for def in ACHIEVEMENTS {
        println!("  {:<6} {:<18} {}", def.id, def.title, def.description);
    }

    Ok(())
}
