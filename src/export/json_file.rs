use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::record::UsageRecord;
use std::fs;
use std::path::Path;

/// Scrive i record in JSON formattato.
pub(crate) fn export_json(records: &[UsageRecord], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
