use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supported forms:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - any `start:end` pair of the above (same granularity on both sides)
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();
        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "range endpoints must share a format: {r}"
            )));
        }
        let (s, _) = expand_period(start)?;
        let (_, e) = expand_period(end)?;
        Ok((s, e))
    } else {
        expand_period(r.trim())
    }
}

/// Expand one period expression into its first and last day.
fn expand_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4].parse().map_err(|_| invalid())?;
            let m: u32 = p[5..7].parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let next_month = if m == 12 {
                NaiveDate::from_ymd_opt(y + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(y, m + 1, 1)
            }
            .ok_or_else(invalid)?;
            let last = next_month.pred_opt().ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
