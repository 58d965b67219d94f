//! Generated anniversary events.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::date::at_noon;

/// Where an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Day-count milestone (e.g. 100th day)
    Count,
    /// Year anniversary
    Year,
    /// Annual holiday from the catalog
    Holiday,
}

/// One dated occurrence produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// `count-{n}`, `year-{n}` or `{holiday}-{year}`, unique within one pass
    pub id: String,
    pub title: String,
    pub category: EventCategory,
    pub date: NaiveDate,
    /// Always seven days before `date`; may already be in the past
    pub reminder_date: NaiveDate,
}

impl Event {
    /// The event day pinned to local noon.
    pub fn starts_at(&self) -> NaiveDateTime {
        at_noon(self.date)
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventCategory::Count => "count",
            EventCategory::Year => "year",
            EventCategory::Holiday => "holiday",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
