pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod price;
pub mod report;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::filter::ReportFilter;
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::path::Path;

/// Open the record store configured for this invocation.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore> {
    RecordStore::open(Path::new(&cfg.storage))
}

pub(crate) fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(raw.to_string()))
}

/// Build a filter from the shared list/report options.
pub(crate) fn build_filter(
    from: &Option<String>,
    to: &Option<String>,
    model: &Option<String>,
    equipment: &Option<String>,
) -> AppResult<ReportFilter> {
    Ok(ReportFilter {
        from: from.as_deref().map(parse_date).transpose()?,
        to: to.as_deref().map(parse_date).transpose()?,
        model: model.clone(),
        equipment: equipment.clone(),
    })
}
