/// Aggregate summary over a (possibly filtered) record list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsageMetrics {
    pub total_hours: f64,
    pub total_fuel: f64,
    pub avg_speed: f64,
    pub total_km: f64,
    /// Mean of the recorded efficiencies strictly greater than zero;
    /// 0 when none qualify.
    pub avg_efficiency: f64,
    pub total_cost: f64,
    pub cost_per_hour: f64,
}

/// One row of a top-N ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub key: String,
    pub value: f64,
}

/// One row of a percentage-of-total breakdown. `share` is pre-formatted to
/// one decimal place, or "-" when the grand total is not positive.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupShare {
    pub key: String,
    pub value: f64,
    pub share: String,
}
