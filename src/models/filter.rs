use crate::models::record::UsageRecord;
use chrono::NaiveDate;

/// Report/list filter. All criteria are optional and combined with AND.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub model: Option<String>,
    pub equipment: Option<String>,
}

impl ReportFilter {
    /// A record without a date fails a `from` bound but passes a `to` bound,
    /// matching the original string comparison against "".
    pub fn matches(&self, rec: &UsageRecord) -> bool {
        if let Some(from) = self.from
            && rec.date.is_none_or(|d| d < from)
        {
            return false;
        }
        if let Some(to) = self.to
            && rec.date.is_some_and(|d| d > to)
        {
            return false;
        }
        if let Some(model) = &self.model
            && !contains_ci(&rec.model, model)
        {
            return false;
        }
        if let Some(equipment) = &self.equipment
            && !contains_ci(&rec.equipment, equipment)
        {
            return false;
        }
        true
    }

    /// Keep only the matching records, preserving order.
    pub fn apply<'a>(&self, records: &'a [UsageRecord]) -> Vec<&'a UsageRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
