//! Terminal rendering for anniv types.
//!
//! Extension traits add colored output to anniv-core types using owo_colors.

use anniv_core::date::{format_date, format_dday};
use anniv_core::reminder::ReminderStatus;
use anniv_core::{Event, EventCategory};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Placeholder line for an empty list.
pub const EMPTY: &str = "없음";

/// Rendering relative to a reference date.
pub trait Render {
    fn render(&self, today: NaiveDate) -> String;
}

impl Render for EventCategory {
    fn render(&self, _today: NaiveDate) -> String {
        let tag = format!("[{}]", self);
        match self {
            EventCategory::Count => tag.cyan().to_string(),
            EventCategory::Year => tag.magenta().to_string(),
            EventCategory::Holiday => tag.green().to_string(),
        }
    }
}

impl Render for ReminderStatus {
    fn render(&self, _today: NaiveDate) -> String {
        match self {
            ReminderStatus::Pending => self.label().yellow().to_string(),
            ReminderStatus::Past => self.label().dimmed().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self, today: NaiveDate) -> String {
        let status = ReminderStatus::of(self, today);

        [
            format!("{} {}", self.title.bold(), self.category.render(today)),
            format!(
                "   {} 기념일: {}",
                format_dday(self.date, today).red(),
                format_date(self.date)
            ),
            format!(
                "   {} 알림: {}  {}",
                format_dday(self.reminder_date, today),
                format_date(self.reminder_date),
                status.render(today)
            ),
        ]
        .join("\n")
    }
}

/// One-line reminder, e.g. "크리스마스 알림 (2024. 12. 25. (수))".
pub fn render_reminder_line(event: &Event) -> String {
    format!("{} 알림 ({})", event.title, format_date(event.date))
}

/// Print a titled section of events.
pub fn print_event_list(heading: &str, events: &[&Event], today: NaiveDate) {
    println!("{}", heading.bold());

    if events.is_empty() {
        println!("  {}", EMPTY.dimmed());
        return;
    }

    for event in events {
        println!("{}", event.render(today));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anniv_core::date::add_days;

    fn christmas() -> Event {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        Event {
            id: "christmas-2024".to_string(),
            title: "크리스마스".to_string(),
            category: EventCategory::Holiday,
            date,
            reminder_date: add_days(date, -7),
        }
    }

    #[test]
    fn reminder_line_names_event_and_date() {
        assert_eq!(
            render_reminder_line(&christmas()),
            "크리스마스 알림 (2024. 12. 25. (수))"
        );
    }

    #[test]
    fn event_render_includes_dday_tags_and_status() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let rendered = christmas().render(today);

        assert!(rendered.contains("크리스마스"));
        assert!(rendered.contains("D-5"));
        assert!(rendered.contains("D+2"));
        assert!(rendered.contains("알림 지남"));
    }
}
