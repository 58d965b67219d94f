//! Persistence for the user-entered settings.
//!
//! The file holds a versioned envelope: `{"v": 1, "settings": {"startDate":
//! "...", "type": "..."}}`. Loading never fails; anything unexpected falls
//! back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnnivError, AnnivResult};
use crate::settings::StoredSettings;

/// Key-value storage name, used as the file name.
pub const SETTINGS_FILE_NAME: &str = "anniversary-settings-v1.json";

pub const SETTINGS_VERSION: u64 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    v: u64,
    settings: &'a StoredSettings,
}

#[derive(Deserialize)]
struct StoredEnvelope {
    v: Option<u64>,
    settings: Option<StoredSettings>,
}

impl StoredSettings {
    /// Load from `path`, falling back to defaults on any problem.
    pub fn load_from(path: &Path) -> StoredSettings {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No stored settings, using defaults");
                return StoredSettings::default();
            }
        };

        Self::from_json(&content).unwrap_or_else(|| {
            debug!(path = %path.display(), "Ignoring unreadable stored settings");
            StoredSettings::default()
        })
    }

    /// Parse a stored envelope. `None` when corrupt or from another version.
    pub fn from_json(content: &str) -> Option<StoredSettings> {
        let envelope: StoredEnvelope = serde_json::from_str(content).ok()?;
        if envelope.v != Some(SETTINGS_VERSION) {
            return None;
        }

        let stored = envelope.settings?;
        let label = stored.label().to_string();
        Some(StoredSettings {
            start_date: stored.start_date,
            label,
        })
    }

    /// Serialize into the versioned envelope.
    pub fn to_json(&self) -> AnnivResult<String> {
        let normalized = StoredSettings {
            start_date: self.start_date.clone(),
            label: self.label().to_string(),
        };

        serde_json::to_string(&Envelope {
            v: SETTINGS_VERSION,
            settings: &normalized,
        })
        .map_err(|e| AnnivError::Serialization(e.to_string()))
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AnnivResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_LABEL;

    #[test]
    fn save_then_load_keeps_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join(SETTINGS_FILE_NAME);
        let stored = StoredSettings {
            start_date: "2023-05-20".to_string(),
            label: "결혼".to_string(),
        };

        stored.save_to(&path).unwrap();
        assert_eq!(StoredSettings::load_from(&path), stored);
    }

    #[test]
    fn saved_file_uses_versioned_envelope() {
        let stored = StoredSettings {
            start_date: String::new(),
            label: String::new(),
        };

        let json: serde_json::Value = serde_json::from_str(&stored.to_json().unwrap()).unwrap();
        assert_eq!(json["v"], 1);
        assert_eq!(json["settings"]["startDate"], "");
        assert_eq!(json["settings"]["type"], DEFAULT_LABEL);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = StoredSettings::load_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, StoredSettings::default());
    }

    #[test]
    fn corrupt_or_foreign_payloads_fall_back_to_defaults() {
        for payload in [
            "not json",
            "null",
            "{}",
            r#"{"v": 2, "settings": {"startDate": "2024-01-01", "type": "결혼"}}"#,
            r#"{"v": 1}"#,
            r#"{"v": 1, "settings": {"startDate": 20240101}}"#,
        ] {
            assert_eq!(StoredSettings::from_json(payload), None, "{}", payload);
        }
    }

    #[test]
    fn blank_fields_fall_back_individually() {
        let loaded =
            StoredSettings::from_json(r#"{"v": 1, "settings": {"startDate": "2024-01-01"}}"#)
                .unwrap();
        assert_eq!(loaded.start_date, "2024-01-01");
        assert_eq!(loaded.label, DEFAULT_LABEL);

        let loaded =
            StoredSettings::from_json(r#"{"v": 1, "settings": {"type": ""}}"#).unwrap();
        assert_eq!(loaded, StoredSettings::default());
    }
}
