//! Generator settings and the persisted user fields.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_date_input;
use crate::holiday::Holiday;

/// Label used when the user has not picked one.
pub const DEFAULT_LABEL: &str = "연애 시작";

/// Labels offered by the CLI help. Any free text is accepted.
pub const SUGGESTED_LABELS: &[&str] = &["연애 시작", "결혼", "기타"];

pub const DEFAULT_COUNTS: &[u32] = &[100, 200, 300, 500, 1000];
pub const DEFAULT_YEARS: &[u32] = &[1, 2, 3, 5, 10];
pub const DEFAULT_YEARS_AHEAD: u32 = 5;

/// Everything the generator needs for one computation.
///
/// Milestones and holiday keys are ordered sets, so duplicate input collapses
/// to a single event and iteration is ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub start_date: Option<NaiveDate>,
    pub label: String,
    /// Whether day 1 is the start day itself
    pub inclusive: bool,
    pub counts: BTreeSet<u32>,
    pub years: BTreeSet<u32>,
    pub holidays: BTreeSet<String>,
    pub years_ahead: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            start_date: None,
            label: DEFAULT_LABEL.to_string(),
            inclusive: true,
            counts: DEFAULT_COUNTS.iter().copied().collect(),
            years: DEFAULT_YEARS.iter().copied().collect(),
            holidays: Holiday::keys().map(String::from).collect(),
            years_ahead: DEFAULT_YEARS_AHEAD,
        }
    }
}

impl Settings {
    /// Overlay the persisted user fields onto these base settings.
    ///
    /// An unparseable start date becomes `None`, which leaves a holidays-only
    /// event list.
    pub fn with_stored(mut self, stored: &StoredSettings) -> Self {
        self.start_date = parse_date_input(&stored.start_date);
        self.label = stored.label().to_string();
        self
    }
}

/// The two fields a user enters, in their persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    /// Raw `YYYY-MM-DD` text, possibly empty
    #[serde(rename = "startDate", default)]
    pub start_date: String,

    #[serde(rename = "type", default)]
    pub label: String,
}

impl Default for StoredSettings {
    fn default() -> Self {
        StoredSettings {
            start_date: String::new(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl StoredSettings {
    /// The label, falling back to the default when blank.
    pub fn label(&self) -> &str {
        if self.label.is_empty() {
            DEFAULT_LABEL
        } else {
            &self.label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_whole_catalog() {
        let settings = Settings::default();
        assert!(settings.inclusive);
        assert_eq!(settings.years_ahead, 5);
        assert_eq!(settings.holidays.len(), crate::holiday::HOLIDAYS.len());
        assert_eq!(
            settings.counts.iter().copied().collect::<Vec<_>>(),
            vec![100, 200, 300, 500, 1000]
        );
    }

    #[test]
    fn with_stored_parses_start_date_and_label() {
        let stored = StoredSettings {
            start_date: "2024-01-01".to_string(),
            label: "결혼".to_string(),
        };
        let settings = Settings::default().with_stored(&stored);
        assert_eq!(settings.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(settings.label, "결혼");
    }

    #[test]
    fn with_stored_degrades_on_bad_input() {
        let stored = StoredSettings {
            start_date: "2024-13-01".to_string(),
            label: String::new(),
        };
        let settings = Settings::default().with_stored(&stored);
        assert_eq!(settings.start_date, None);
        assert_eq!(settings.label, DEFAULT_LABEL);
    }
}
