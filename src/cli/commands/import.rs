use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;

/// Import a CSV file, replacing the whole store with its rows.
///
/// A file-read failure is surfaced to the user and leaves the store
/// untouched; malformed rows inside a readable file degrade to
/// zeros/empties instead of failing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let text = fs::read_to_string(file)
            .map_err(|e| AppError::Storage(format!("Cannot read {file}: {e}")))?;

        let records = codec::from_csv(&text);
        let count = records.len();

        let mut store = super::open_store(cfg)?;
        store.replace_all(records)?;

        success(format!("Imported {count} entries from {file}"));
    }
    Ok(())
}
