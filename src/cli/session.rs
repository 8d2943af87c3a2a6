//! Interactive session: the dashboard analog
//!
//! A read-eval loop over the seeded demo profile. Every command maps onto
//! one engine operation or one read model; rejected operations print their
//! reason and change nothing. A pending generation request is polled
//! between commands and merged when it lands.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use mom3ntum::arcade;
use mom3ntum::catalog::{demo_profile, season_tiers, starter_quests, store_item, STORE_ITEMS};
use mom3ntum::config::Config;
use mom3ntum::domain::{RewardTrack, TierStatus};
use mom3ntum::engine::{Engine, EngineError, EngineEvent};
use mom3ntum::generate::{spawn_generation, GenerationHandle, GenerationRequest};

pub fn session_command(config: Config) -> Result<()> {
    let mut engine = Engine::new(demo_profile(), starter_quests(), season_tiers());
    let mut pending: Option<GenerationHandle> = None;

    println!("Mom3ntum session. Type 'help' for commands, 'quit' to exit.");
    print_summary(&engine);

    let stdin = io::stdin();
    loop {
        // Merge a finished generation request before prompting
        if let Some(handle) = pending.as_mut() {
            if let Some(seeds) = handle.try_take() {
                println!(
                    "Generated {} quest(s) for theme \"{}\":",
                    seeds.len(),
                    handle.theme()
                );
                for seed in &seeds {
                    println!("  {} (+{} XP, +{} MP)", seed.title, seed.reward_xp, seed.reward_points);
                }
                engine.add_generated_quests(seeds);
            }
            if pending.as_ref().is_some_and(|h| h.is_finished()) {
                pending = None;
            }
        }

        print!("mom3ntum> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "help" => print_help(),
            "profile" => print_profile(&engine),
            "activity" => print_activity(&engine, args.first().and_then(|s| s.parse().ok())),
            "quests" => print_quests(&engine),
            "complete" => match args.first() {
                Some(id) => report(engine.complete_quest(id)),
                None => println!("usage: complete <quest-id>"),
            },
            "tiers" => print_tiers(&engine),
            "claim" => match args.first().and_then(|s| s.parse::<u32>().ok()) {
                Some(tier) => {
                    let track = if args.get(1) == Some(&"premium") {
                        RewardTrack::Premium
                    } else {
                        RewardTrack::Free
                    };
                    report(engine.claim_reward(tier, track));
                }
                None => println!("usage: claim <tier> [premium]"),
            },
            "convert" => report(engine.convert_points_to_ticket()),
            "buy-tickets" => match args.first().and_then(|s| s.parse::<u8>().ok()) {
                Some(amount) => report(engine.grant_tickets(amount)),
                None => println!("usage: buy-tickets <amount>"),
            },
            "upgrade" => {
                engine.grant_premium();
                println!("Premium Pass active.");
            }
            "store" => print_store(),
            "buy" => match args.first().and_then(|id| store_item(id)) {
                Some(item) => report(engine.purchase(item)),
                None => println!("usage: buy <item-id> (see 'store')"),
            },
            "spin" => {
                let segment = arcade::spin(&mut rand::thread_rng());
                println!("The wheel lands on: {}", segment.label);
                print_events(&engine.award_spin(segment));
            }
            "generate" => {
                if pending.is_some() {
                    println!("A generation request is already in flight.");
                    continue;
                }
                let theme = if args.is_empty() {
                    config.default_theme.clone()
                } else {
                    args.join(" ")
                };
                let count = config.generation_count;
                pending = Some(spawn_generation(
                    config.clone(),
                    GenerationRequest { theme, count },
                ));
                println!("Requested quests; they will appear when ready.");
            }
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'. Type 'help'."),
        }
    }

    Ok(())
}

/// Print either the events of a successful operation or the rejection
fn report(result: Result<Vec<EngineEvent>, EngineError>) {
    match result {
        Ok(events) => print_events(&events),
        Err(e) => println!("Rejected: {e}"),
    }
}

fn print_events(events: &[EngineEvent]) {
    for event in events {
        match event {
            EngineEvent::XpAwarded { amount } => println!("  +{amount} XP"),
            EngineEvent::LevelUp {
                old_level,
                new_level,
                new_xp_cap,
            } => println!("  LEVEL UP! {old_level} -> {new_level} (next cap {new_xp_cap} XP)"),
            EngineEvent::PointsEarned { amount } => println!("  +{amount} MP"),
            EngineEvent::PointsSpent { amount } => println!("  -{amount} MP"),
            EngineEvent::TicketsGranted { count, held } => {
                println!("  +{count} FVT (holding {held}/5)")
            }
            EngineEvent::QuestCompleted { title, .. } => println!("  Quest done: {title}"),
            EngineEvent::RewardClaimed { tier, track, label } => {
                println!("  Claimed tier {tier} {track}: {label}")
            }
            EngineEvent::QuestsAdded { count } => println!("  {count} quest(s) added"),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  profile             show the profile");
    println!("  activity [n]        show the latest n feed entries (default 10)");
    println!("  quests              list the quest board");
    println!("  complete <id>       complete a quest");
    println!("  tiers               show the seasonal journey");
    println!("  claim <n> [premium] claim a tier reward");
    println!("  convert             convert 10,000 MP into 1 FVT");
    println!("  buy-tickets <n>     buy Face Value Tickets directly");
    println!("  upgrade             activate the Premium Pass");
    println!("  store               list arcade store items");
    println!("  buy <item-id>       spend points on a store item");
    println!("  spin                spin the daily wheel");
    println!("  generate [theme...] request quests from the collaborator");
    println!("  quit                exit");
}

fn print_summary(engine: &Engine) {
    let p = engine.profile();
    println!(
        "{} (@{}) - level {}, {}/{} XP, {} MP, {}/5 FVT{}",
        p.name,
        p.handle,
        p.level,
        p.xp,
        p.xp_cap,
        p.points,
        p.tickets,
        if p.premium { ", premium" } else { "" },
    );
}

fn print_profile(engine: &Engine) {
    let p = engine.profile();
    print_summary(engine);
    println!("  {}", p.bio);
    println!(
        "  quests completed: {}  total XP earned: {}  total MP earned: {}",
        p.quests_completed, p.total_xp_earned, p.total_points_earned,
    );
    println!(
        "  streak: {} days  referrals: {} (code {})",
        p.current_streak, p.referral_count, p.referral_code,
    );
}

fn print_activity(engine: &Engine, limit: Option<usize>) {
    let limit = limit.unwrap_or(10);
    for activity in engine.profile().activity.iter().take(limit) {
        let reward = activity
            .reward
            .as_deref()
            .map(|r| format!("  [{r}]"))
            .unwrap_or_default();
        println!(
            "  {} ({}) {}{}",
            activity.timestamp.format("%Y-%m-%d %H:%M"),
            activity.kind.as_str(),
            activity.description,
            reward,
        );
    }
}

fn print_quests(engine: &Engine) {
    for quest in engine.quests() {
        let marker = if quest.completed { "x" } else { " " };
        println!(
            "  [{}] {:<14} [{:<9}] {:<20} +{} XP, +{} MP ({}/{})",
            marker,
            quest.id,
            quest.category.as_str(),
            quest.title,
            quest.reward_xp,
            quest.reward_points,
            quest.progress,
            quest.total,
        );
    }
}

fn print_store() {
    for item in STORE_ITEMS {
        println!(
            "  {:<3} {:<26} {:>5} Pts  ({})",
            item.id,
            item.title,
            item.cost,
            item.kind.as_str(),
        );
    }
}

fn print_tiers(engine: &Engine) {
    let status_str = |status: TierStatus| match status {
        TierStatus::Locked => "locked",
        TierStatus::Unlocked => "open",
        TierStatus::Claimed => "claimed",
    };
    for tier in engine.tiers() {
        let free = engine
            .tier_status(tier.tier, RewardTrack::Free)
            .map(status_str)
            .unwrap_or("?");
        let premium = engine
            .tier_status(tier.tier, RewardTrack::Premium)
            .map(status_str)
            .unwrap_or("?");
        println!(
            "  Tier {:>2}  free: {:<22} [{}]  premium: {:<22} [{}]",
            tier.tier, tier.free_reward.label, free, tier.premium_reward.label, premium,
        );
    }
}
