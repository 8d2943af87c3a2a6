use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "mom3ntum")]
#[command(about = "Mom3ntum fan engagement engine - quests, seasonal rewards, and the point economy")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to mom3ntum/config.toml in the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive session against the seeded demo profile
    Session,

    /// Print the static catalogs (quests, season tiers, store, wheel)
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = mom3ntum::config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Catalog) => cli::catalog::catalog_command(),
        Some(Commands::Session) | None => cli::session::session_command(config),
    }
}
