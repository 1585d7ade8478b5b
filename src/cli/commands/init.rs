use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory and a config file with the default policy.
/// `--entries` sets the entry file recorded in the new config. An existing
/// config file is never overwritten.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_path();
    let existed = path.exists();

    let cfg = Config::init_at(&path, cli.entries.clone())?;

    println!("⚙️  Initializing companion…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Entries    : {}", cfg.entries_file);

    if existed {
        println!("ℹ️  Config file already present, left untouched");
    } else {
        success(format!(
            "Config written: {}h/day, grace {} min, overwork up to {} min",
            cfg.office_hours, cfg.grace_minutes, cfg.allow_overwork_minutes
        ));
    }

    Ok(())
}
