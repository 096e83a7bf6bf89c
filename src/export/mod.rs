// src/export/mod.rs

pub mod attachment;
mod fs_utils;
pub mod pdf;
pub mod report;

pub use report::{ReportSettings, render_checklist, write_checklist};

use crate::errors::AppResult;
use crate::models::entry::ChecklistEntry;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Local export of the report: overwrite check, render, write.
pub fn export_pdf(
    entry: &ChecklistEntry,
    settings: &ReportSettings,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    info(format!("Exporting to PDF: {}", path.display()));
    write_checklist(entry, settings, path)?;
    success(format!("PDF export completed: {}", path.display()));
    Ok(())
}
