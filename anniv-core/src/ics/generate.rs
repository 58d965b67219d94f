//! ICS document generation.
//!
//! The document is written line by line rather than through a calendar
//! builder: calendar apps importing it depend on this exact property order.

use chrono::{DateTime, Utc};

use crate::date::{add_days, format_date, format_ics_date};
use crate::event::Event;

/// Suggested file name for a saved export.
pub const EXPORT_FILE_NAME: &str = "anniversary-reminders.ics";

const PRODID: &str = "-//Anniversary Buddy//KR//";
const CALENDAR_NAME: &str = "기념일 알림";
const UID_DOMAIN: &str = "anniversary-buddy";
const ALARM_TRIGGER: &str = "-P7D";

/// Content lines longer than this many octets are folded.
const MAX_LINE_OCTETS: usize = 75;

/// Serialize events into one calendar document.
///
/// Each event becomes an all-day VEVENT with a single display alarm seven
/// days ahead. UIDs combine `generated_at` with the event's position, so they
/// are unique within one export but not stable across exports.
pub fn export_calendar(events: &[Event], generated_at: DateTime<Utc>) -> String {
    let stamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", CALENDAR_NAME),
    ];

    for (index, event) in events.iter().enumerate() {
        let title = escape_text(&event.title);

        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}-{}@{}", stamp, index, UID_DOMAIN),
            format!("DTSTAMP:{}", stamp),
            format!("SUMMARY:{}", title),
            format!("DTSTART;VALUE=DATE:{}", format_ics_date(event.date)),
            format!("DTEND;VALUE=DATE:{}", format_ics_date(add_days(event.date, 1))),
            format!(
                "DESCRIPTION:{}",
                escape_text(&format!("알림 날짜 {}", format_date(event.reminder_date)))
            ),
            "BEGIN:VALARM".to_string(),
            format!("TRIGGER:{}", ALARM_TRIGGER),
            "ACTION:DISPLAY".to_string(),
            format!("DESCRIPTION:{} 알림", title),
            "END:VALARM".to_string(),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());

    lines
        .iter()
        .map(|line| fold_line(line))
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Escape the TEXT characters that would otherwise end a value or a line.
/// Carriage returns are dropped so a CRLF in the input becomes one `\n`.
pub fn escape_text(value: &str) -> String {
    value
        .replace('\r', "")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

/// Fold a content line at 75 octets, continuing with a leading space.
/// Never splits a UTF-8 sequence.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > budget {
            folded.push_str("\r\n ");
            // Continuation lines spend one octet on the leading space.
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        folded.push(ch);
        used += width;
    }

    folded
}
