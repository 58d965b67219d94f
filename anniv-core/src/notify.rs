//! Due-today notifications with per-session deduplication.

use std::collections::HashSet;

use crate::date::{format_date, format_ics_date};
use crate::event::Event;

pub const NOTIFICATION_TITLE: &str = "오늘 알림";

/// A notification ready to hand to a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// `{event id}-{reminder YYYYMMDD}`
    pub key: String,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn for_event(event: &Event) -> Self {
        Notification {
            key: Self::key_for(event),
            title: NOTIFICATION_TITLE.to_string(),
            body: format!("{} ({})", event.title, format_date(event.date)),
        }
    }

    /// Identifies one occurrence of one reminder.
    pub fn key_for(event: &Event) -> String {
        format!("{}-{}", event.id, format_ics_date(event.reminder_date))
    }
}

/// Remembers which reminders were already announced.
///
/// Keep one ledger per session; a fresh ledger announces everything again.
#[derive(Debug, Default)]
pub struct NotificationLedger {
    sent: HashSet<String>,
}

impl NotificationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications for `due` events that this ledger has not yielded yet.
    pub fn pending<'a, I>(&mut self, due: I) -> Vec<Notification>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        due.into_iter()
            .filter(|event| self.sent.insert(Notification::key_for(event)))
            .map(Notification::for_event)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{add_days, make_date};
    use crate::event::EventCategory;

    fn christmas(year: i32) -> Event {
        let date = make_date(year, 12, 25).unwrap();
        Event {
            id: format!("christmas-{}", year),
            title: "크리스마스".to_string(),
            category: EventCategory::Holiday,
            date,
            reminder_date: add_days(date, -7),
        }
    }

    #[test]
    fn notification_carries_title_and_formatted_date() {
        let note = Notification::for_event(&christmas(2024));
        assert_eq!(note.key, "christmas-2024-20241218");
        assert_eq!(note.title, "오늘 알림");
        assert_eq!(note.body, "크리스마스 (2024. 12. 25. (수))");
    }

    #[test]
    fn ledger_announces_each_occurrence_once() {
        let mut ledger = NotificationLedger::new();
        let events = vec![christmas(2024)];

        assert_eq!(ledger.pending(&events).len(), 1);
        assert!(ledger.pending(&events).is_empty());
        assert_eq!(ledger.len(), 1);

        let next_year = vec![christmas(2025)];
        assert_eq!(ledger.pending(&next_year).len(), 1);
    }
}
