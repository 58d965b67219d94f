//! Generator configuration at ~/.config/anniv/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config_dir;
use super::settings_store::SETTINGS_FILE_NAME;
use crate::error::{AnnivError, AnnivResult};
use crate::holiday::Holiday;
use crate::settings::{
    DEFAULT_COUNTS, DEFAULT_YEARS, DEFAULT_YEARS_AHEAD, Settings, StoredSettings,
};

fn default_inclusive() -> bool {
    true
}

fn default_counts() -> Vec<u32> {
    DEFAULT_COUNTS.to_vec()
}

fn default_years() -> Vec<u32> {
    DEFAULT_YEARS.to_vec()
}

fn default_holidays() -> Vec<String> {
    Holiday::keys().map(String::from).collect()
}

fn default_years_ahead() -> u32 {
    DEFAULT_YEARS_AHEAD
}

/// Base generator settings plus where the user fields are stored.
///
/// Every key is optional; missing keys use the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Overrides the settings file location (`~` is expanded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<PathBuf>,

    #[serde(default = "default_inclusive")]
    pub inclusive: bool,

    #[serde(default = "default_counts")]
    pub counts: Vec<u32>,

    #[serde(default = "default_years")]
    pub years: Vec<u32>,

    #[serde(default = "default_holidays")]
    pub holidays: Vec<String>,

    #[serde(default = "default_years_ahead")]
    pub years_ahead: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            settings_file: None,
            inclusive: default_inclusive(),
            counts: default_counts(),
            years: default_years(),
            holidays: default_holidays(),
            years_ahead: default_years_ahead(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> AnnivResult<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load the global config, writing a commented template on first run.
    pub fn load() -> AnnivResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> AnnivResult<Self> {
        let config: AppConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| AnnivError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AnnivError::Config(e.to_string()))?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Where the user-entered settings live.
    pub fn settings_path(&self) -> AnnivResult<PathBuf> {
        match &self.settings_file {
            Some(path) => {
                let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
                Ok(PathBuf::from(expanded))
            }
            None => Ok(config_dir()?.join(SETTINGS_FILE_NAME)),
        }
    }

    /// Merge the persisted user fields over the configured base settings.
    pub fn settings(&self, stored: &StoredSettings) -> Settings {
        let base = Settings {
            inclusive: self.inclusive,
            counts: self.counts.iter().copied().collect(),
            years: self.years.iter().copied().collect(),
            holidays: self.holidays.iter().cloned().collect(),
            years_ahead: self.years_ahead,
            ..Settings::default()
        };

        base.with_stored(stored)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AnnivResult<()> {
        let list = |values: &[u32]| {
            values
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let holidays = default_holidays()
            .iter()
            .map(|key| format!("\"{}\"", key))
            .collect::<Vec<_>>()
            .join(", ");

        let contents = format!(
            "\
# anniv configuration

# Where the start date and label are stored:
# settings_file = \"~/.config/anniv/{}\"

# Count the start day as day 1:
# inclusive = true

# Day-count milestones:
# counts = [{}]

# Year anniversaries:
# years = [{}]

# Holidays to include:
# holidays = [{}]

# How many years ahead to show:
# years_ahead = {}
",
            SETTINGS_FILE_NAME,
            list(DEFAULT_COUNTS),
            list(DEFAULT_YEARS),
            holidays,
            DEFAULT_YEARS_AHEAD
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AnnivError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AnnivError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn commented_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        AppConfig::create_default_config(&path).unwrap();
        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "inclusive = false\ncounts = [50, 100, 100]\nholidays = [\"christmas\"]\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.inclusive);
        assert_eq!(config.years, DEFAULT_YEARS.to_vec());
        assert_eq!(config.years_ahead, DEFAULT_YEARS_AHEAD);

        let stored = StoredSettings {
            start_date: "2024-01-01".to_string(),
            label: "결혼".to_string(),
        };
        let settings = config.settings(&stored);
        assert_eq!(settings.counts.len(), 2, "duplicate milestones collapse");
        assert_eq!(settings.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(settings.label, "결혼");
        assert!(!settings.inclusive);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "years_ahead = \"many\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AnnivError::Config(_)));
    }

    #[test]
    fn settings_path_expands_tilde() {
        let config = AppConfig {
            settings_file: Some(PathBuf::from("/tmp/anniv/settings.json")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.settings_path().unwrap(),
            PathBuf::from("/tmp/anniv/settings.json")
        );

        let config = AppConfig {
            settings_file: Some(PathBuf::from("~/anniv.json")),
            ..AppConfig::default()
        };
        assert!(!config.settings_path().unwrap().starts_with("~"));
    }
}
