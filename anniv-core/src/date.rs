//! Calendar-day arithmetic.
//!
//! Dates are plain wall-clock calendar days. Whenever a time of day is needed
//! (notifications, display) the day is pinned to local noon, so there is no
//! daylight-saving or rounding drift to absorb. Every other module compares
//! dates only through these helpers.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Short Korean weekday names, Monday first.
const WEEKDAYS_KO: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Build a calendar date, or `None` if it does not exist (e.g. Feb 30).
pub fn make_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Pin a date to 12:00 local wall-clock time.
pub fn at_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(noon())
}

/// Shift by `n` calendar days. Saturates at the representable range.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    let shifted = if n >= 0 {
        date.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    };

    shifted.unwrap_or(if n >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Shift by `n` years keeping month and day.
///
/// When the target day does not exist (Feb 29 in a non-leap year) the result
/// clamps to the last day of the target month instead of rolling over.
pub fn add_years(date: NaiveDate, n: i32) -> NaiveDate {
    let saturated = if n >= 0 { NaiveDate::MAX } else { NaiveDate::MIN };

    let Some(year) = date.year().checked_add(n) else {
        return saturated;
    };

    make_date(year, date.month(), date.day())
        .or_else(|| last_day_of_month(year, date.month()))
        .unwrap_or(saturated)
}

/// Whole calendar days from `b` to `a` (positive when `a` is later).
pub fn diff_in_days(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

/// Parse a strict `YYYY-MM-DD` string.
///
/// Returns `None` for empty input, anything that is not exactly three
/// dash-separated numeric components, a zero component, or a date that does
/// not exist on the calendar.
pub fn parse_date_input(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut parts = text.split('-');
    let year = parse_component(parts.next()?, 4)?;
    let month = parse_component(parts.next()?, 2)?;
    let day = parse_component(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }

    make_date(i32::try_from(year).ok()?, month, day)
}

fn parse_component(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().filter(|value| *value != 0)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        make_date(year.checked_add(1)?, 1, 1)?
    } else {
        make_date(year, month + 1, 1)?
    };
    first_of_next.pred_opt()
}

/// Korean display form, e.g. `2024. 04. 09. (화)`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}. ({})",
        date.format("%Y. %m. %d"),
        weekday_ko(date.weekday())
    )
}

fn weekday_ko(weekday: Weekday) -> &'static str {
    WEEKDAYS_KO[weekday.num_days_from_monday() as usize]
}

/// Relative-day tag: `D-Day`, `D-3` (three days ahead) or `D+2` (two days ago).
pub fn format_dday(date: NaiveDate, base: NaiveDate) -> String {
    let diff = diff_in_days(date, base);
    match diff {
        0 => "D-Day".to_string(),
        d if d > 0 => format!("D-{}", d),
        d => format!("D+{}", d.unsigned_abs()),
    }
}

/// Date-only iCalendar form (`YYYYMMDD`).
pub fn format_ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
