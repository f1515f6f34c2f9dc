use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec::parse_decimal;
use crate::core::report;
use crate::errors::AppResult;
use crate::models::metrics::RankingEntry;
use crate::models::record::UsageRecord;
use crate::ui::messages::header;
use crate::utils::formatting::format_number;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        from,
        to,
        model,
        equipment,
        price,
    } = cmd
    {
        let store = super::open_store(cfg)?;
        let filter = super::build_filter(from, to, model, equipment)?;
        let records = filter.apply(store.records());

        if records.is_empty() {
            println!("No entries to report on.");
            return Ok(());
        }

        let fuel_price = match price {
            Some(raw) => parse_decimal(raw),
            None => store.fuel_price(),
        };

        let metrics = report::calculate_metrics(&records, fuel_price);
        let currency = &cfg.currency;

        header("Summary");
        println!("Total hours:     {} h", format_number(metrics.total_hours));
        println!("Total fuel:      {} L", format_number(metrics.total_fuel));
        println!("Average speed:   {} km/h", format_number(metrics.avg_speed));
        println!("Total distance:  {} km", format_number(metrics.total_km));
        println!(
            "Avg efficiency:  {} km/L",
            format_number(metrics.avg_efficiency)
        );
        println!(
            "Total cost:      {currency} {}",
            format_number(metrics.total_cost)
        );
        println!(
            "Cost per hour:   {currency} {}",
            format_number(metrics.cost_per_hour)
        );

        let by_equipment = report::group_by(&records, equipment_key);
        let by_model = report::group_by(&records, model_key);

        let hours_by_equipment = report::map_group_sum(&by_equipment, |r| r.hours_worked);
        let hours_by_model = report::map_group_sum(&by_model, |r| r.hours_worked);
        let fuel_by_equipment = report::map_group_sum(&by_equipment, |r| r.fuel_used);

        header("Hours by model (top 5)");
        print_ranking(report::top_n(hours_by_model, 5), "Model", "Hours");

        header("Most / least used");
        match report::max_entry(&hours_by_equipment) {
            Some(e) => println!("Most used:  {} ({} h)", e.key, format_number(e.value)),
            None => println!("Most used:  -"),
        }
        match report::min_entry(&hours_by_equipment) {
            Some(e) => println!("Least used: {} ({} h)", e.key, format_number(e.value)),
            None => println!("Least used: -"),
        }

        header("Consumption per hour (L/h, top 5)");
        print_ranking(
            report::top_n(report::consumption_per_hour(&by_equipment), 5),
            "Equipment",
            "L/h",
        );

        header("Efficiency by model (km/L, top 5)");
        print_ranking(
            report::top_n(report::efficiency_by_group(&by_model), 5),
            "Model",
            "km/L",
        );

        header("Share by equipment");
        print_shares("Hours", &hours_by_equipment, metrics.total_hours);
        print_shares("Fuel", &fuel_by_equipment, metrics.total_fuel);
    }
    Ok(())
}

fn equipment_key(r: &UsageRecord) -> &str {
    &r.equipment
}

fn model_key(r: &UsageRecord) -> &str {
    &r.model
}

fn print_ranking(entries: Vec<RankingEntry>, key_header: &str, value_header: &str) {
    let mut table = Table::new(&["#", key_header, value_header]);
    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.key.clone(),
            format_number(e.value),
        ]);
    }
    print!("{}", table.render());
}

fn print_shares(label: &str, entries: &[RankingEntry], total: f64) {
    println!("{label}:");
    for share in report::share_list(entries, total).into_iter().take(5) {
        let pct = if share.share == "-" {
            share.share.clone()
        } else {
            format!("{}%", share.share)
        };
        println!("  {}  {} ({pct})", share.key, format_number(share.value));
    }
}
