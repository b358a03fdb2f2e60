// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{BlockExport, DayExport, PlanExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
