use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::resolve_config_path;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = resolve_config_path(cli);

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn check_config(path: &Path) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "no configuration file at {} (run `rmedalarm init`)",
            path.display()
        )));
    }

    let missing = Config::missing_keys(path)?;
    if missing.is_empty() {
        success("Configuration file is complete");
    } else {
        for key in &missing {
            warning(format!("Missing key '{key}', the default value is used"));
        }
    }
    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    // Default editor based on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            return Ok(());
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
        }
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{default_editor}'"
            ));
            Ok(())
        }
        Ok(_) | Err(_) => {
            error(format!(
                "Failed to edit configuration file using fallback '{default_editor}'"
            ));
            Err(AppError::Config(format!("could not run editor '{default_editor}'")))
        }
    }
}
