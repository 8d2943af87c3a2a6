//! The progression/reward-ledger engine
//!
//! A single synchronous actor owning one [`Profile`], the quest catalog,
//! and the season tier catalog. Every public operation is an atomic state
//! transition: it either applies fully and appends one activity entry, or
//! rejects with an [`EngineError`] and leaves all state untouched.

mod claims;
mod error;
mod events;
pub mod ledger;
pub mod progression;
pub mod tickets;

pub use error::EngineError;
pub use events::EngineEvent;
pub use progression::Progression;
pub use tickets::{CONVERSION_COST, TICKET_CAP};

use tracing::{debug, info};

use crate::arcade::{StoreItem, WheelSegment};
use crate::domain::{ActivityKind, Profile, Quest, QuestCategory, RewardKind, RewardTrack, SeasonTier, TierStatus};
use crate::generate::QuestSeed;

/// Engine state: the profile plus the two catalogs it draws from.
///
/// Views read the profile and catalogs through the accessors and never
/// mutate them directly; all writes go through the operations below.
pub struct Engine {
    profile: Profile,
    quests: Vec<Quest>,
    tiers: Vec<SeasonTier>,
}

impl Engine {
    /// Create an engine over an explicit profile and catalogs
    pub fn new(profile: Profile, quests: Vec<Quest>, tiers: Vec<SeasonTier>) -> Self {
        Self {
            profile,
            quests,
            tiers,
        }
    }

    // ========================================
    // READ MODELS
    // ========================================

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn tiers(&self) -> &[SeasonTier] {
        &self.tiers
    }

    pub fn active_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.is_active())
    }

    /// Claim status of one (tier, track) slot
    pub fn tier_status(&self, tier: u32, track: RewardTrack) -> Result<TierStatus, EngineError> {
        let t = self
            .tiers
            .iter()
            .find(|t| t.tier == tier)
            .ok_or(EngineError::UnknownTier(tier))?;
        Ok(claims::status(t, track, self.profile.level))
    }

    // ========================================
    // QUEST COMPLETION
    // ========================================

    /// Complete a quest: XP through the progression calculator, points
    /// through the ledger, counters bumped, quest marked terminal.
    ///
    /// Completing an already-completed quest is rejected so a quest can
    /// never double-grant.
    pub fn complete_quest(&mut self, id: &str) -> Result<Vec<EngineEvent>, EngineError> {
        let idx = self
            .quests
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| EngineError::UnknownQuest(id.to_string()))?;
        if self.quests[idx].completed {
            return Err(EngineError::QuestAlreadyCompleted { id: id.to_string() });
        }

        let (title, reward_xp, reward_points) = {
            let q = &self.quests[idx];
            (q.title.clone(), q.reward_xp, q.reward_points)
        };

        let mut events = self.apply_xp(reward_xp);
        if reward_points > 0 {
            self.earn_points(reward_points);
            events.push(EngineEvent::PointsEarned {
                amount: reward_points,
            });
        }
        self.profile.quests_completed += 1;

        let quest = &mut self.quests[idx];
        quest.completed = true;
        quest.progress = quest.total;

        self.profile.record(
            ActivityKind::Quest,
            format!("Completed \"{title}\""),
            Some(format!("+{reward_points} MP")),
        );
        debug!(quest = id, title, "quest completed");

        events.push(EngineEvent::QuestCompleted {
            id: id.to_string(),
            title,
        });
        Ok(events)
    }

    /// Merge quests from the generation collaborator into the catalog
    pub fn add_generated_quests(&mut self, seeds: Vec<QuestSeed>) -> Vec<EngineEvent> {
        let count = seeds.len();
        for seed in seeds {
            self.quests.push(Quest {
                id: format!("gen-{}", uuid::Uuid::new_v4()),
                title: seed.title,
                description: seed.description,
                reward_xp: seed.reward_xp,
                reward_points: seed.reward_points,
                category: QuestCategory::Generated,
                completed: false,
                progress: 0,
                total: seed.total.max(1),
                link: None,
            });
        }
        info!(count, "merged generated quests into the catalog");
        vec![EngineEvent::QuestsAdded { count }]
    }

    // ========================================
    // SEASONAL JOURNEY CLAIMS
    // ========================================

    /// Claim one (tier, track) reward slot.
    ///
    /// The slot must be unlocked and unclaimed; the premium track also
    /// requires the premium entitlement. Reward effects land before the
    /// claimed flag flips, so a rejected ticket grant (cap reached) leaves
    /// the slot claimable.
    pub fn claim_reward(
        &mut self,
        tier: u32,
        track: RewardTrack,
    ) -> Result<Vec<EngineEvent>, EngineError> {
        let idx = self
            .tiers
            .iter()
            .position(|t| t.tier == tier)
            .ok_or(EngineError::UnknownTier(tier))?;

        claims::ensure_claimable(
            &self.tiers[idx],
            track,
            self.profile.level,
            self.profile.premium,
        )?;

        let reward = self.tiers[idx].reward(track).clone();
        let mut events = Vec::new();
        let mut reward_note = None;

        match &reward.kind {
            RewardKind::Points { amount } => {
                self.earn_points(*amount);
                events.push(EngineEvent::PointsEarned { amount: *amount });
                reward_note = Some(format!("+{amount} MP"));
            }
            RewardKind::Xp { amount } => {
                events.extend(self.apply_xp(*amount));
            }
            RewardKind::Ticket { count } => {
                self.profile.tickets = tickets::grant(self.profile.tickets, *count)?;
                events.push(EngineEvent::TicketsGranted {
                    count: *count,
                    held: self.profile.tickets,
                });
                reward_note = Some(format!("+{count} FVT"));
            }
            // Cosmetics have no ledger effect beyond the activity entry
            _ => {}
        }

        self.tiers[idx].set_claimed(track);
        self.profile.record(
            ActivityKind::Reward,
            format!("Claimed {}", reward.label),
            reward_note,
        );
        debug!(tier, track = track.as_str(), label = %reward.label, "reward claimed");

        events.push(EngineEvent::RewardClaimed {
            tier,
            track,
            label: reward.label,
        });
        Ok(events)
    }

    // ========================================
    // ECONOMY
    // ========================================

    /// Spend points on an arcade store item
    pub fn purchase(&mut self, item: &StoreItem) -> Result<Vec<EngineEvent>, EngineError> {
        self.spend_points(item.cost, item.title)
    }

    /// Spend points, rejecting if the balance cannot cover it
    pub fn spend_points(
        &mut self,
        amount: u64,
        description: &str,
    ) -> Result<Vec<EngineEvent>, EngineError> {
        self.profile.points = ledger::spend(self.profile.points, amount)?;
        self.profile.record(
            ActivityKind::Game,
            format!("Purchased: {description}"),
            Some(format!("-{amount} MP")),
        );
        debug!(amount, description, "points spent");
        Ok(vec![EngineEvent::PointsSpent { amount }])
    }

    /// Convert 10,000 points into one Face Value Ticket
    pub fn convert_points_to_ticket(&mut self) -> Result<Vec<EngineEvent>, EngineError> {
        let (points, held) = tickets::convert(self.profile.points, self.profile.tickets)?;
        self.profile.points = points;
        self.profile.tickets = held;
        self.profile.record(
            ActivityKind::Ticket,
            "Converted Points to FVT",
            Some("+1 FVT".to_string()),
        );
        debug!(held, "points converted to ticket");
        Ok(vec![
            EngineEvent::PointsSpent {
                amount: CONVERSION_COST,
            },
            EngineEvent::TicketsGranted { count: 1, held },
        ])
    }

    /// Grant the premium entitlement (payment handled externally).
    ///
    /// Idempotent: upgrading an already-premium profile changes nothing.
    pub fn grant_premium(&mut self) {
        if self.profile.premium {
            return;
        }
        self.profile.premium = true;
        self.profile
            .record(ActivityKind::Reward, "Upgraded to the Premium Pass", None);
        info!("premium entitlement granted");
    }

    /// Grant tickets from a direct purchase (payment handled externally)
    pub fn grant_tickets(&mut self, amount: u8) -> Result<Vec<EngineEvent>, EngineError> {
        self.profile.tickets = tickets::grant(self.profile.tickets, amount)?;
        self.profile.record(
            ActivityKind::Ticket,
            format!("Purchased {amount} Face Value Ticket(s)"),
            Some(format!("+{amount} FVT")),
        );
        debug!(amount, held = self.profile.tickets, "tickets granted");
        Ok(vec![EngineEvent::TicketsGranted {
            count: amount,
            held: self.profile.tickets,
        }])
    }

    // ========================================
    // ARCADE SPIN
    // ========================================

    /// Credit whatever the sampled wheel segment carries.
    ///
    /// The segment handed in is the one shown to the user, so the displayed
    /// outcome and the granted value can never disagree.
    pub fn award_spin(&mut self, segment: &WheelSegment) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        if segment.points > 0 {
            self.earn_points(segment.points);
            events.push(EngineEvent::PointsEarned {
                amount: segment.points,
            });
        }
        if segment.xp > 0 {
            events.extend(self.apply_xp(segment.xp));
        }

        if events.is_empty() {
            self.profile
                .record(ActivityKind::Game, "Daily Spin: no win this time", None);
        } else {
            self.profile.record(
                ActivityKind::Game,
                "Won Daily Spin",
                Some(format!("+{}", segment.label)),
            );
        }
        debug!(segment = segment.label, "spin awarded");
        events
    }

    // ========================================
    // INTERNAL HELPERS
    // ========================================

    /// Route an XP grant through the progression calculator and mirror the
    /// cumulative counter. Emits a LevelUp event per boundary crossed once.
    fn apply_xp(&mut self, gained: u64) -> Vec<EngineEvent> {
        if gained == 0 {
            return Vec::new();
        }
        let before = Progression {
            level: self.profile.level,
            xp: self.profile.xp,
            xp_cap: self.profile.xp_cap,
        };
        let after = before.apply_xp_gain(gained);

        self.profile.level = after.level;
        self.profile.xp = after.xp;
        self.profile.xp_cap = after.xp_cap;
        self.profile.total_xp_earned = self.profile.total_xp_earned.saturating_add(gained);

        let mut events = vec![EngineEvent::XpAwarded { amount: gained }];
        if after.level > before.level {
            info!(
                old_level = before.level,
                new_level = after.level,
                "level up"
            );
            events.push(EngineEvent::LevelUp {
                old_level: before.level,
                new_level: after.level,
                new_xp_cap: after.xp_cap,
            });
        }
        events
    }

    fn earn_points(&mut self, amount: u64) {
        self.profile.points = ledger::earn(self.profile.points, amount);
        self.profile.total_points_earned = self.profile.total_points_earned.saturating_add(amount);
    }
}
