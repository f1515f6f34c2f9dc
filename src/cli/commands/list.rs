use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::formatting::{format_number, format_opt_number, short_id};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        from,
        to,
        model,
        equipment,
    } = cmd
    {
        let store = super::open_store(cfg)?;
        let filter = super::build_filter(from, to, model, equipment)?;
        let records = filter.apply(store.records());

        if records.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        let mut table = Table::new(&[
            "ID", "Equipment", "Model", "Unit", "Km/h", "Hours", "Fuel (L)", "Km/L", "Date",
        ]);
        for rec in &records {
            table.add_row(vec![
                short_id(&rec.id),
                rec.equipment.clone(),
                rec.model.clone(),
                rec.unit.clone(),
                format_number(rec.speed_kmh),
                format_number(rec.hours_worked),
                format_number(rec.fuel_used),
                format_opt_number(rec.efficiency),
                if rec.date_str().is_empty() {
                    "-".to_string()
                } else {
                    rec.date_str()
                },
            ]);
        }
        print!("{}", table.render());
        println!("\n{} entries.", records.len());
    }
    Ok(())
}
