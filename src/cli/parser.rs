use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for companion
#[derive(Parser)]
#[command(
    name = "companion",
    version = env!("CARGO_PKG_VERSION"),
    about = "Work-time companion: daily cap, grace/overwork bands and weekly catch-up from your clock-in history",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the time-entry file (JSON or CSV)
    #[arg(global = true, long = "entries", value_name = "FILE")]
    pub entries: Option<String>,

    /// Reference instant (RFC 3339); defaults to the system clock
    #[arg(global = true, long = "now", value_name = "TIMESTAMP")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default policy
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show today's worked time, cap and status
    Status {
        /// Minutes of overwork authorized for today (overrides the config)
        #[arg(long = "overwork", value_name = "MINUTES")]
        overwork: Option<i64>,

        #[arg(long = "json", help = "Print the statistics as JSON")]
        json: bool,
    },

    /// Show the current week day by day with the catch-up total
    Week {
        #[arg(long = "json", help = "Print the week summary as JSON")]
        json: bool,
    },

    /// Export the current week's per-day totals
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl Cli {
    /// Config file in use: `--config` if given, the standard location otherwise.
    pub fn config_path(&self) -> std::path::PathBuf {
        match &self.config {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => crate::config::Config::config_file(),
        }
    }
}
