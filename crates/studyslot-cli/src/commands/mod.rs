pub mod config;
pub mod plan;

use std::path::Path;

use studyslot_core::Config;

/// Load the config from `path`, or from the default location.
///
/// An explicit path that does not exist yet yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) if !path.exists() => Config::default(),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
