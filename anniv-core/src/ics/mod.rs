//! iCalendar (RFC 5545) export.

mod generate;

pub use generate::{EXPORT_FILE_NAME, escape_text, export_calendar};
