use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rShiftPlan
/// CLI application to project work-order completion over a shift calendar
#[derive(Parser)]
#[command(
    name = "rshiftplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Project when a work order (setup + production) completes over a weekly shift calendar",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-plant setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Calendar knobs shared by `plan`, `calendar` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct CalendarArgs {
    /// Weekday coverage: continuous, morning or afternoon (default from config)
    #[arg(long = "coverage", value_name = "MODE")]
    pub coverage: Option<String>,

    /// Alternate morning/afternoon every week (single-shift coverage only)
    #[arg(long = "alternate")]
    pub alternate: bool,

    /// Work on Saturday morning (overrides `work_saturday` from config)
    #[arg(long = "saturday", conflicts_with = "no_saturday")]
    pub saturday: bool,

    /// Keep Saturday closed (overrides `work_saturday` from config)
    #[arg(long = "no-saturday")]
    pub no_saturday: bool,

    /// Non-working date (YYYY-MM-DD), repeatable; added to the configured holidays
    #[arg(long = "holiday", value_name = "DATE")]
    pub holidays: Vec<String>,
}

/// The work order to project.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Start date (YYYY-MM-DD)
    pub date: String,

    /// Start time (HH:MM)
    #[arg(long = "at", default_value = "06:00")]
    pub at: String,

    /// Setup time in minutes
    #[arg(long = "setup", value_name = "MIN", conflicts_with = "setup_hours")]
    pub setup: Option<f64>,

    /// Setup time in hours
    #[arg(long = "setup-hours", value_name = "HOURS")]
    pub setup_hours: Option<f64>,

    /// Total production time in minutes
    #[arg(
        long = "production",
        value_name = "MIN",
        conflicts_with_all = ["pieces", "piece_minutes"]
    )]
    pub production: Option<f64>,

    /// Number of pieces (with --piece-minutes)
    #[arg(long = "pieces", requires = "piece_minutes")]
    pub pieces: Option<u32>,

    /// Minutes per piece (with --pieces)
    #[arg(long = "piece-minutes", value_name = "MIN", requires = "pieces")]
    pub piece_minutes: Option<f64>,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Project the completion of a work order
    Plan {
        #[command(flatten)]
        request: RequestArgs,

        #[arg(long = "blocks", help = "Print every block of the timeline")]
        blocks: bool,
    },

    /// Show the shift calendar for a period
    Calendar {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same formats, e.g. "2025-06-01:2025-06-14".
        /// Default: current month.
        #[arg(long, short)]
        period: Option<String>,

        /// Week the shift rotation starts from (YYYY-MM-DD, default: first date of the period)
        #[arg(long = "from", value_name = "DATE")]
        from: Option<String>,

        #[command(flatten)]
        calendar: CalendarArgs,
    },

    /// Export the projected timeline blocks
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the file if it exists")]
        force: bool,

        #[command(flatten)]
        request: RequestArgs,
    },
}
