//! Configuration and local persistence.
//!
//! - `app_config`: generator defaults from `~/.config/anniv/config.toml`
//! - `settings_store`: the two user-entered fields, in a versioned JSON file

mod app_config;
mod settings_store;

pub use app_config::AppConfig;
pub use settings_store::{SETTINGS_FILE_NAME, SETTINGS_VERSION};

use std::path::PathBuf;

use crate::error::{AnnivError, AnnivResult};

/// `~/.config/anniv` (or the platform equivalent).
pub fn config_dir() -> AnnivResult<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| AnnivError::Config("Could not determine config directory".into()))?
        .join("anniv");

    Ok(dir)
}
