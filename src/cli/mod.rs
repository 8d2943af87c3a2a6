//! CLI commands

pub mod catalog;
pub mod session;
