use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::resolve_config_path;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Creates the configuration directory (if missing) and writes a default
/// configuration file. An existing file is kept unless `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = resolve_config_path(cli);

    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
