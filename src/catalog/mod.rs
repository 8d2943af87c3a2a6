//! Static seed catalogs
//!
//! Everything the engine starts from: the starter quest board, the season
//! tier track, the achievement definitions, and the arcade store. Catalogs
//! are cloned into the engine at startup; the statics themselves are never
//! mutated.

mod achievements;
mod quests;
mod store;
mod tiers;

pub use achievements::{AchievementDef, ACHIEVEMENTS};
pub use quests::{demo_profile, starter_quests};
pub use store::{store_item, STORE_ITEMS};
pub use tiers::season_tiers;
