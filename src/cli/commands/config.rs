use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;
use std::process::Command as Process;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let content = fs::read_to_string(&path)
                .map_err(|_| AppError::Config(format!("Cannot read {}", path.display())))?;
            println!("{content}");
            return Ok(());
        }

        if *edit_config {
            let chosen = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .unwrap_or_else(default_editor);

            let status = Process::new(&chosen).arg(&path).status().map_err(|_| {
                AppError::Config(format!("Failed to launch editor '{chosen}'"))
            })?;

            if !status.success() {
                return Err(AppError::Config(format!("Editor '{chosen}' exited with an error")));
            }
            return Ok(());
        }

        info(format!("Config file: {}", path.display()));
    }
    Ok(())
}

fn default_editor() -> String {
    if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "nano".to_string()
    }
}
