// src/export/logic.rs

use crate::core::logic::PlanReport;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{BlockExport, PlanExport};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export of a projection's block log.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv (blocks only) | json (completion, blocks, days) | xlsx (two sheets)
    /// - `file`: output path
    /// - `force`: overwrite an existing file
    pub fn export(report: &PlanReport, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if report.result.blocks.is_empty() {
            warning("Nothing scheduled: the export contains no blocks.");
        }
        debug!(format = format.as_str(), blocks = report.result.blocks.len(), "exporting");

        match format {
            ExportFormat::Csv => {
                let rows: Vec<BlockExport> =
                    report.result.blocks.iter().map(BlockExport::from).collect();
                export_csv(&rows, path)?
            }
            ExportFormat::Json => export_json(&PlanExport::from(report), path)?,
            ExportFormat::Xlsx => export_xlsx(report, path)?,
        }

        Ok(())
    }
}
