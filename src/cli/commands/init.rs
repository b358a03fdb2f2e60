use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with the default plant calendar
/// (two shifts 06:00-13:50 / 13:50-21:40, 20-minute breaks, Saturday 06:00-12:00).
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    info("Initializing rShiftPlan…");

    let cfg = Config::init_all(path, cli.test)?;

    if cli.test {
        info("Test mode: configuration file not written");
    } else {
        success(format!("Config file : {}", path.display()));
    }
    println!(
        "Shifts      : morning {} (break {}), afternoon {} (break {})",
        cfg.morning_shift, cfg.morning_break, cfg.afternoon_shift, cfg.afternoon_break
    );
    println!("Saturday    : {}", cfg.saturday_shift);

    Ok(())
}
