use crate::core::codec;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::record::UsageRecord;
use std::fs;
use std::path::Path;

/// Write the records as canonical semicolon-delimited CSV.
pub(crate) fn export_csv(records: &[UsageRecord], path: &Path) -> AppResult<()> {
    let text = codec::to_csv(records)?;
    fs::write(path, text)?;
    notify_export_success("CSV", path);
    Ok(())
}
