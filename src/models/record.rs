use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One equipment-usage entry.
///
/// `speed_kmh` and `hours_worked` are distinct fields even though the CSV
/// layout only carries hours: rows decoded from CSV always have
/// `speed_kmh = 0`, while entries typed in directly may carry both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: String,
    pub equipment: String,
    pub model: String,
    pub unit: String,
    #[serde(default)]
    pub speed_kmh: f64,
    #[serde(default)]
    pub hours_worked: f64,
    #[serde(default)]
    pub fuel_used: f64,
    /// Recorded efficiency in km/L. `None` means "never measured", which is
    /// not the same thing as a measured zero.
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl UsageRecord {
    /// High-level constructor for entries created from the CLI.
    /// A fresh UUID is minted; editing an existing entry keeps its id instead.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        equipment: String,
        model: String,
        unit: String,
        speed_kmh: f64,
        hours_worked: f64,
        fuel_used: f64,
        efficiency: Option<f64>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: new_record_id(),
            equipment,
            model,
            unit,
            speed_kmh,
            hours_worked,
            fuel_used,
            efficiency,
            date,
        }
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Mint an opaque record id. Import paths call this for every decoded row,
/// so CSV round trips never preserve source ids.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
