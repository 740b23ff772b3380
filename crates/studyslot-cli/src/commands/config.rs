use std::path::{Path, PathBuf};

use clap::Subcommand;
use studyslot_core::Config;

use super::load_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "planner.min_block_minutes", "schedule_path")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

fn config_file(path: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::path()?),
    }
}

pub fn run(action: ConfigAction, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config(config_path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = load_config(config_path)?;
            config.set(&key, &value)?;
            config.planner.validate()?;
            config.save_to(&config_file(config_path)?)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = load_config(config_path)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save_to(&config_file(config_path)?)?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", config_file(config_path)?.display());
        }
    }
    Ok(())
}
