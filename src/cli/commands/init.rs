use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the config file and an empty storage directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;
    Ok(())
}
