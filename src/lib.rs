//! companion library root.
//! Exposes the work-time engine (`core`), its data model, the entry sources
//! and the CLI plumbing used by the `companion` binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::logic::Core;
pub use models::{
    daily_stats::DailyWorkStats, time_entry::TimeEntry, week_summary::WeekSummary,
    work_config::WorkTimeConfig, work_status::WorkStatus,
};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Status { .. } => cli::commands::status::handle(cli, cfg),
        Commands::Week { .. } => cli::commands::week::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; `init` only needs the path
    let mut cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load_from(&cli.config_path())?,
    };

    if let Some(entries) = &cli.entries {
        cfg.entries_file = entries.clone();
    }

    dispatch(&cli, &cfg)
}
