use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(cfg, path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(cfg, path, editor.as_deref())?;
        }
    }

    Ok(())
}
