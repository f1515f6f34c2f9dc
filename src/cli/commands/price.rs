use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec::parse_decimal;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_number;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Price { value } = cmd {
        let store = super::open_store(cfg)?;

        match value {
            Some(raw) => {
                let price = parse_decimal(raw);
                store.set_fuel_price(price)?;
                success(format!(
                    "Fuel price set to {} {}/L",
                    cfg.currency,
                    format_number(price)
                ));
            }
            None => {
                info(format!(
                    "Fuel price: {} {}/L",
                    cfg.currency,
                    format_number(store.fuel_price())
                ));
            }
        }
    }
    Ok(())
}
