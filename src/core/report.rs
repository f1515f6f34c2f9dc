//! Pure aggregation over a record list.
//!
//! Everything here is a single synchronous pass over in-memory data; there
//! is no stored state. Callers pre-filter the list with `ReportFilter` and
//! pass the slice in.

use crate::models::metrics::{GroupShare, RankingEntry, UsageMetrics};
use crate::models::record::UsageRecord;

/// Placeholder group key for records with an empty grouping field.
pub const MISSING_KEY: &str = "—";

/// Groups in first-occurrence order of their keys. Callers must not attach
/// meaning to that order.
pub type Groups<'a> = Vec<(String, Vec<&'a UsageRecord>)>;

pub fn sum<F>(records: &[&UsageRecord], f: F) -> f64
where
    F: Fn(&UsageRecord) -> f64,
{
    records.iter().map(|r| f(r)).sum()
}

/// Mean of a projection; 0 for an empty list, never NaN.
pub fn avg<F>(records: &[&UsageRecord], f: F) -> f64
where
    F: Fn(&UsageRecord) -> f64,
{
    if records.is_empty() {
        return 0.0;
    }
    sum(records, f) / records.len() as f64
}

/// Partition records by `key_fn`, substituting MISSING_KEY for empty keys.
pub fn group_by<'a, F>(records: &[&'a UsageRecord], key_fn: F) -> Groups<'a>
where
    F: Fn(&UsageRecord) -> &str,
{
    let mut groups: Groups<'a> = Vec::new();
    for &rec in records {
        let raw = key_fn(rec);
        let key = if raw.trim().is_empty() { MISSING_KEY } else { raw };
        match groups.iter_mut().find(|(k, _)| k == key) {
            Some((_, members)) => members.push(rec),
            None => groups.push((key.to_string(), vec![rec])),
        }
    }
    groups
}

/// Per-group sum of a projection.
pub fn map_group_sum<F>(groups: &Groups<'_>, f: F) -> Vec<RankingEntry>
where
    F: Fn(&UsageRecord) -> f64,
{
    groups
        .iter()
        .map(|(key, members)| RankingEntry {
            key: key.clone(),
            value: sum(members, &f),
        })
        .collect()
}

/// Entry with the greatest value; ties keep the first encountered.
pub fn max_entry(entries: &[RankingEntry]) -> Option<&RankingEntry> {
    entries
        .iter()
        .fold(None, |best: Option<&RankingEntry>, e| match best {
            Some(b) if e.value <= b.value => Some(b),
            _ => Some(e),
        })
}

/// Entry with the least value; ties keep the first encountered.
pub fn min_entry(entries: &[RankingEntry]) -> Option<&RankingEntry> {
    entries
        .iter()
        .fold(None, |best: Option<&RankingEntry>, e| match best {
            Some(b) if e.value >= b.value => Some(b),
            _ => Some(e),
        })
}

/// Derived distance for one record: an ordered fallback chain, tried until
/// a rule produces a positive value. It is a heuristic, not a measurement;
/// with neither predictor present the answer is 0.
pub fn total_km(rec: &UsageRecord) -> f64 {
    const RULES: [fn(&UsageRecord) -> f64; 2] = [
        |r| r.speed_kmh * r.hours_worked,
        |r| r.efficiency.unwrap_or(0.0) * r.fuel_used,
    ];
    RULES
        .iter()
        .map(|rule| rule(rec))
        .find(|v| *v > 0.0)
        .unwrap_or(0.0)
}

/// Aggregate summary for the given list and fuel price.
pub fn calculate_metrics(records: &[&UsageRecord], fuel_price: f64) -> UsageMetrics {
    let total_hours = sum(records, |r| r.hours_worked);
    let total_fuel = sum(records, |r| r.fuel_used);
    let avg_speed = avg(records, |r| r.speed_kmh);
    let total_km = sum(records, total_km);

    let with_efficiency: Vec<&UsageRecord> = records
        .iter()
        .copied()
        .filter(|r| r.efficiency.is_some_and(|e| e > 0.0))
        .collect();
    let avg_efficiency = avg(&with_efficiency, |r| r.efficiency.unwrap_or(0.0));

    let total_cost = fuel_price * total_fuel;
    let cost_per_hour = if total_hours > 0.0 {
        total_cost / total_hours
    } else {
        0.0
    };

    UsageMetrics {
        total_hours,
        total_fuel,
        avg_speed,
        total_km,
        avg_efficiency,
        total_cost,
        cost_per_hour,
    }
}

/// Top `n` entries by value, descending. The sort is stable, so ties keep
/// their first-occurrence order.
pub fn top_n(mut entries: Vec<RankingEntry>, n: usize) -> Vec<RankingEntry> {
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(n);
    entries
}

/// Liters burned per hour worked, per equipment group; 0 when a group has
/// no hours on record.
pub fn consumption_per_hour(groups: &Groups<'_>) -> Vec<RankingEntry> {
    groups
        .iter()
        .map(|(key, members)| {
            let hours = sum(members, |r| r.hours_worked);
            let fuel = sum(members, |r| r.fuel_used);
            RankingEntry {
                key: key.clone(),
                value: if hours > 0.0 { fuel / hours } else { 0.0 },
            }
        })
        .collect()
}

/// Derived km/L per group: total derived distance over total fuel, 0 when
/// the group burned no fuel.
pub fn efficiency_by_group(groups: &Groups<'_>) -> Vec<RankingEntry> {
    groups
        .iter()
        .map(|(key, members)| {
            let km = sum(members, total_km);
            let fuel = sum(members, |r| r.fuel_used);
            RankingEntry {
                key: key.clone(),
                value: if fuel > 0.0 { km / fuel } else { 0.0 },
            }
        })
        .collect()
}

/// A group's share of a grand total, one decimal place. "-" when the total
/// is not positive.
pub fn percent_share(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "-".to_string();
    }
    format!("{:.1}", 100.0 * value / total)
}

/// Percentage breakdown sorted by value, descending.
pub fn share_list(entries: &[RankingEntry], total: f64) -> Vec<GroupShare> {
    let mut sorted: Vec<&RankingEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    sorted
        .into_iter()
        .map(|e| GroupShare {
            key: e.key.clone(),
            value: e.value,
            share: percent_share(e.value, total),
        })
        .collect()
}
