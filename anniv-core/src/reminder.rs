//! Views derived from a generated event list.
//!
//! Nothing here keeps state: each view is recomputed from the full list and
//! preserves its order.

use chrono::NaiveDate;

use crate::date::diff_in_days;
use crate::event::Event;

/// Number of events shown in the collapsed "upcoming" list.
pub const UPCOMING_PREVIEW_COUNT: usize = 6;

/// Days ahead covered by the "this week" view, today included.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Events whose reminder falls on `today`.
pub fn due_today(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    reminders_within(events, today, 0, 0)
}

/// Events whose reminder falls within the next week, today included.
pub fn due_this_week(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    reminders_within(events, today, 0, WEEK_WINDOW_DAYS)
}

/// Events whose reminder is `from..=to` days away from `today`.
pub fn reminders_within(events: &[Event], today: NaiveDate, from: i64, to: i64) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| {
            let diff = diff_in_days(event.reminder_date, today);
            diff >= from && diff <= to
        })
        .collect()
}

/// The "upcoming" list as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingPreview<'a> {
    pub visible: &'a [Event],
    /// Events left out of a collapsed preview
    pub hidden: usize,
}

/// First `UPCOMING_PREVIEW_COUNT` events, or all of them when `expanded`.
pub fn upcoming_preview(events: &[Event], expanded: bool) -> UpcomingPreview<'_> {
    if expanded || events.len() <= UPCOMING_PREVIEW_COUNT {
        return UpcomingPreview {
            visible: events,
            hidden: 0,
        };
    }

    UpcomingPreview {
        visible: &events[..UPCOMING_PREVIEW_COUNT],
        hidden: events.len() - UPCOMING_PREVIEW_COUNT,
    }
}

/// Whether an event's advance notice has already gone by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    Pending,
    Past,
}

impl ReminderStatus {
    pub fn of(event: &Event, today: NaiveDate) -> Self {
        if diff_in_days(event.reminder_date, today) < 0 {
            ReminderStatus::Past
        } else {
            ReminderStatus::Pending
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReminderStatus::Pending => "알림 예정",
            ReminderStatus::Past => "알림 지남",
        }
    }
}
