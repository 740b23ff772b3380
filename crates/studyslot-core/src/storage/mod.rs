mod config;
mod schedule_file;

pub use config::Config;
pub use schedule_file::{JsonScheduleFile, ScheduleStore};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/studyslot[-dev]/` based on STUDYSLOT_ENV.
///
/// Set STUDYSLOT_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYSLOT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studyslot-dev")
    } else {
        base_dir.join("studyslot")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
