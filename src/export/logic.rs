use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv_file::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_file::export_json;
use crate::export::range::parse_range;
use crate::models::record::UsageRecord;
use crate::store::RecordStore;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the (optionally range-filtered) record list.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or an expression understood by
    ///   `parse_range` (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `start:end`)
    pub fn export(
        store: &RecordStore,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let records = select_records(store, date_bounds);

        if records.is_empty() {
            warning("No records found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        Ok(())
    }
}

/// Records within the bounds, in store order. Undated records are only
/// included when no range is given.
fn select_records(store: &RecordStore, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<UsageRecord> {
    match bounds {
        None => store.records().to_vec(),
        Some((start, end)) => store
            .records()
            .iter()
            .filter(|r| r.date.is_some_and(|d| d >= start && d <= end))
            .cloned()
            .collect(),
    }
}
