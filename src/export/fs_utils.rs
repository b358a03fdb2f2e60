// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::path::Path;

/// Verifies that the output file can be created.
///
/// - file missing → Ok
/// - file present and `force` → Ok (overwritten)
/// - file present without `force` → error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        warning(format!("Overwriting existing file '{}'.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
