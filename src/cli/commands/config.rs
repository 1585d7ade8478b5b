use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::check::{fill_missing_fields, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli.config_path();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!("No config file at {}", path.display()));
            } else {
                let missing = missing_fields(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `companion config --migrate` to add them with default values.");
                }
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            let added = fill_missing_fields(&path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.clone())?;
        }
    }

    Ok(())
}

fn edit(path: &std::path::Path, requested: Option<String>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    if matches!(Command::new(&editor_to_use).arg(path).status(), Ok(s) if s.success()) {
        success(format!(
            "Configuration file edited successfully using '{}'",
            editor_to_use
        ));
        return Ok(());
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        editor_to_use, default_editor
    ));

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        }
        Ok(s) => Err(AppError::Config(format!(
            "Failed to edit configuration file: '{}' exited with {}",
            default_editor, s
        ))),
        Err(e) => Err(AppError::Config(format!(
            "Failed to edit configuration file using fallback '{}': {}",
            default_editor, e
        ))),
    }
}
