use crate::cli::commands::Workload;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let load = Workload::prepare(cli, cfg)?;
        let week = Core::week_summary(&load.entries, &load.policy, load.now);
        ExportLogic::export(&week, *format, file, *force)?;
    }
    Ok(())
}
