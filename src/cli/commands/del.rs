use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = super::open_store(cfg)?;
        if !store.delete(id)? {
            return Err(AppError::RecordNotFound(id.clone()));
        }
        success(format!("Deleted entry {id}"));
    }
    Ok(())
}
