use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec::parse_decimal;
use crate::errors::{AppError, AppResult};
use crate::models::record::UsageRecord;
use crate::ui::messages::success;

/// Add a usage entry, or replace an existing one in full when --edit is set.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        equipment,
        model,
        unit,
        speed,
        hours,
        fuel,
        efficiency,
        date,
        edit,
    } = cmd
    {
        //
        // 1. Numeric fields share the locale-aware parser with CSV import,
        //    so "1.234,56" works here too. Absent flags count as zero.
        //
        let speed_kmh = parse_optional_decimal(speed);
        let hours_worked = parse_optional_decimal(hours);
        let fuel_used = parse_optional_decimal(fuel);

        //
        // 2. Efficiency distinguishes "not measured" from a measured zero.
        //
        let efficiency = match efficiency.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_decimal(raw)),
        };

        //
        // 3. Parse date (optional)
        //
        let date = date.as_deref().map(super::parse_date).transpose()?;

        //
        // 4. Persist
        //
        let mut store = super::open_store(cfg)?;

        match edit {
            Some(id) => {
                let replacement = UsageRecord {
                    id: id.clone(),
                    equipment: equipment.clone(),
                    model: model.clone(),
                    unit: unit.clone(),
                    speed_kmh,
                    hours_worked,
                    fuel_used,
                    efficiency,
                    date,
                };
                if !store.update(replacement)? {
                    return Err(AppError::RecordNotFound(id.clone()));
                }
                success(format!("Updated entry {id}"));
            }
            None => {
                let rec = UsageRecord::new(
                    equipment.clone(),
                    model.clone(),
                    unit.clone(),
                    speed_kmh,
                    hours_worked,
                    fuel_used,
                    efficiency,
                    date,
                );
                let id = rec.id.clone();
                store.add(rec)?;
                success(format!("Added entry {id}"));
            }
        }
    }

    Ok(())
}

fn parse_optional_decimal(raw: &Option<String>) -> f64 {
    raw.as_deref().map(parse_decimal).unwrap_or(0.0)
}
