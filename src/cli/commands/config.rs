use std::fs;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the active configuration (file content if present, otherwise
/// the serialized defaults).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        let path = Config::config_file();

        if path.exists() {
            info(format!("Configuration file: {}", path.display()));
            println!("{}", fs::read_to_string(&path)?);
        } else {
            info("No configuration file found, showing active values:");
            println!(
                "{}",
                serde_yaml::to_string(cfg).unwrap_or_else(|_| "<unprintable>".to_string())
            );
        }
    }

    Ok(())
}
