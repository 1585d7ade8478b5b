use crate::cli::commands::Workload;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::daily_stats::DailyWorkStats;
use crate::ui::messages::{header, status_banner};
use crate::utils::formatting::colored_status;
use crate::utils::mins2readable;

/// Handle the `status` command: today's figures for the loaded entries.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { overwork, json } = &cli.command {
        let mut load = Workload::prepare(cli, cfg)?;

        if let Some(minutes) = overwork {
            load.policy.overwork_minutes_requested = *minutes;
            load.policy.validate()?;
        }

        let stats = Core::compute_daily_stats(&load.entries, &load.policy, load.now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        header(format!("Today ({})", load.now.date_naive()));
        print_stats(&stats);

        let open = load
            .entries
            .iter()
            .filter(|e| e.date == load.now.date_naive() && e.is_open())
            .count();
        if open > 0 {
            println!("Open sessions : {open}");
        }

        println!();
        status_banner(stats.status, stats.remaining_minutes);
    }

    Ok(())
}

fn print_stats(stats: &DailyWorkStats) {
    println!(
        "Worked        : {} ({} min)",
        mins2readable(stats.today_minutes, false, false),
        stats.today_minutes
    );
    println!(
        "Applied limit : {} ({} min)",
        mins2readable(stats.applied_limit_minutes, false, false),
        stats.applied_limit_minutes
    );
    println!(
        "Remaining     : {} ({} min)",
        mins2readable(stats.remaining_minutes, false, false),
        stats.remaining_minutes
    );
    println!("Status        : {}", colored_status(stats.status));
    println!(
        "Week catch-up : {} ({} min)",
        mins2readable(stats.weekly_catch_up_minutes, false, false),
        stats.weekly_catch_up_minutes
    );
}
