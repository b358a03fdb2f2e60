//! rShiftPlan library root.
//! Exposes the shift calendar, the projection engine, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::calendar::ShiftCalendar;
pub use crate::core::projection::{ProjectionOptions, Projector};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Plan { .. } => cli::commands::plan::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config overrides the default location
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when an existing file is broken
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
