//! Core engine for anniversary reminders.
//!
//! Everything in this crate except `config` is pure: the reference date and
//! export timestamp are passed in explicitly, so results are deterministic.
//! - `date` for calendar arithmetic pinned to local noon
//! - `generate` for turning settings into an ordered event list
//! - `reminder` and `notify` for the views derived from that list
//! - `ics` for iCalendar export

pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod generate;
pub mod holiday;
pub mod ics;
pub mod notify;
pub mod reminder;
pub mod settings;

pub use event::{Event, EventCategory};
pub use generate::generate_events;
pub use settings::{Settings, StoredSettings};
