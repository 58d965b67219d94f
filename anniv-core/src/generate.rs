//! Event generation.
//!
//! `generate_events` is a pure function of settings and the reference date.
//! Callers recompute the whole list whenever either changes.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::date::{add_days, add_years, make_date};
use crate::event::{Event, EventCategory};
use crate::holiday::Holiday;
use crate::settings::Settings;

/// Days between a reminder and its event.
pub const REMINDER_LEAD_DAYS: i64 = 7;

/// Build the ordered list of events visible from `today`.
///
/// Count events come first, then year events, then holidays year by year.
/// The list is then windowed to `[today, today + years_ahead years]` and
/// stably sorted by date, so same-day events keep that emission order.
pub fn generate_events(settings: &Settings, today: NaiveDate) -> Vec<Event> {
    let years_ahead = i32::try_from(settings.years_ahead).unwrap_or(i32::MAX);
    let window_end = add_years(today, years_ahead);

    let mut events = Vec::new();

    if let Some(start) = settings.start_date {
        push_milestones(&mut events, settings, start);
    } else {
        debug!("No start date set, generating holidays only");
    }

    push_holidays(&mut events, settings, today.year(), years_ahead);

    events.retain(|event| event.date >= today && event.date <= window_end);
    events.sort_by_key(|event| event.date);

    debug!(count = events.len(), %today, %window_end, "Generated events");
    events
}

fn push_milestones(events: &mut Vec<Event>, settings: &Settings, start: NaiveDate) {
    for &count in &settings.counts {
        let offset = if settings.inclusive {
            i64::from(count) - 1
        } else {
            i64::from(count)
        };

        events.push(new_event(
            format!("count-{}", count),
            format!("{} {}일", settings.label, count),
            EventCategory::Count,
            add_days(start, offset),
        ));
    }

    for &year in &settings.years {
        let shift = i32::try_from(year).unwrap_or(i32::MAX);

        events.push(new_event(
            format!("year-{}", year),
            format!("{} {}주년", settings.label, year),
            EventCategory::Year,
            add_years(start, shift),
        ));
    }
}

fn push_holidays(events: &mut Vec<Event>, settings: &Settings, first_year: i32, years_ahead: i32) {
    let holidays: Vec<&Holiday> = settings
        .holidays
        .iter()
        .filter_map(|key| {
            let holiday = Holiday::lookup(key);
            if holiday.is_none() {
                debug!(key = %key, "Skipping unknown holiday");
            }
            holiday
        })
        .collect();

    if holidays.is_empty() {
        return;
    }

    // Years past the representable range could never land inside the window.
    let last_year = first_year
        .saturating_add(years_ahead)
        .min(NaiveDate::MAX.year());

    for year in first_year..=last_year {
        for holiday in &holidays {
            let Some(date) = make_date(year, holiday.month, holiday.day) else {
                continue;
            };

            events.push(new_event(
                format!("{}-{}", holiday.key, year),
                holiday.label.to_string(),
                EventCategory::Holiday,
                date,
            ));
        }
    }
}

fn new_event(id: String, title: String, category: EventCategory, date: NaiveDate) -> Event {
    Event {
        id,
        title,
        category,
        date,
        reminder_date: add_days(date, -REMINDER_LEAD_DAYS),
    }
}
