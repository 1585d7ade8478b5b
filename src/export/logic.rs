// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DayExport;
use crate::models::week_summary::WeekSummary;
use crate::utils::path::expand_tilde;

/// High-level export of the weekly report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one row per day of `week` to `file` (absolute path).
    pub fn export(
        week: &WeekSummary,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let rows: Vec<DayExport> = week.days.iter().map(DayExport::from).collect();

        log::info!(
            "exporting {} day(s) of week {} as {}",
            rows.len(),
            week.week_start,
            format.as_str()
        );

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(())
    }
}
