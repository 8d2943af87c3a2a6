//! Mom3ntum - fan engagement engine
//!
//! The rules core of the Mom3ntum platform: quests that pay out XP and
//! Mom3ntum Points, a ten-tier seasonal journey with free and premium
//! reward tracks, a hard-capped Face Value Ticket allowance, the arcade
//! spin wheel, and an append-only activity feed. All state lives in memory
//! behind a single [`engine::Engine`]; views (the bundled CLI session
//! included) only read the exposed models and invoke engine operations.

pub mod arcade;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod generate;

pub use domain::*;
pub use engine::{Engine, EngineError, EngineEvent};
