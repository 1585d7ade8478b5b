use crate::cli::commands::Workload;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::week_summary::WeekSummary;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_shortfall, color_for_worked, paint};
use crate::utils::date::weekday_short;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

/// Handle the `week` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { json } = &cli.command {
        let load = Workload::prepare(cli, cfg)?;
        let week = Core::week_summary(&load.entries, &load.policy, load.now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&week)?);
            return Ok(());
        }

        header(format!("Week of {}", week.week_start));
        print!("{}", render_week(&week, separator(cfg)));
    }

    Ok(())
}

fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}

fn render_week(week: &WeekSummary, sep: char) -> String {
    let mut table = Table::new(
        vec![
            Column::new("Date", 10),
            Column::new("Day", 4),
            Column::new("Worked", 8),
            Column::new("Target", 8),
            Column::new("Shortfall", 9),
        ],
        sep,
    );

    for d in &week.days {
        let worked = mins2readable(d.worked_minutes, false, false);
        let short = mins2readable(d.shortfall_minutes, false, false);
        table.add_row(vec![
            d.date.to_string(),
            weekday_short(&d.date).to_string(),
            paint(&worked, color_for_worked(d.worked_minutes, d.target_minutes)),
            mins2readable(d.target_minutes, false, false),
            paint(&short, color_for_shortfall(d.shortfall_minutes)),
        ]);
    }

    let mut out = table.render();
    out.push_str(&format!(
        "\nWorked {} of {} | Catch-up: {}\n",
        mins2readable(week.worked_minutes(), false, false),
        mins2readable(week.target_minutes(), false, false),
        mins2readable(week.catch_up_minutes, false, false),
    ));
    out
}
