// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{BlockExport, PlanExport};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: completion, blocks and per-day totals.
pub(crate) fn export_json(plan: &PlanExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(plan)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one row per block (header from serde).
pub(crate) fn export_csv(blocks: &[BlockExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in blocks {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
