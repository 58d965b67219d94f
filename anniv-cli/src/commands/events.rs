use anniv_core::reminder::upcoming_preview;
use anniv_core::{Event, generate_events};
use anyhow::{Context as _, Result};
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::Context;
use crate::render::print_event_list;

/// JSON view of an event with its noon-pinned start time.
#[derive(Serialize)]
struct EventJson<'a> {
    #[serde(flatten)]
    event: &'a Event,
    starts_at: NaiveDateTime,
}

pub fn run(ctx: &Context, all: bool, json: bool) -> Result<()> {
    let today = ctx.today();
    let events = generate_events(&ctx.settings, today);

    if json {
        println!("{}", events_json(&events)?);
        return Ok(());
    }

    let preview = upcoming_preview(&events, all);
    let visible: Vec<_> = preview.visible.iter().collect();
    print_event_list("다가오는", &visible, today);

    if preview.hidden > 0 {
        println!();
        println!(
            "{}",
            format!("더 보기 ({}개): anniv events --all", preview.hidden).dimmed()
        );
    }

    if ctx.settings.start_date.is_none() {
        println!();
        println!(
            "{}",
            "시작일이 없어 공휴일만 표시합니다. `anniv set --start-date YYYY-MM-DD`".dimmed()
        );
    }

    Ok(())
}

fn events_json(events: &[Event]) -> Result<String> {
    let view: Vec<_> = events
        .iter()
        .map(|event| EventJson {
            event,
            starts_at: event.starts_at(),
        })
        .collect();

    serde_json::to_string_pretty(&view).context("Failed to serialize events")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anniv_core::EventCategory;
    use chrono::NaiveDate;

    #[test]
    fn json_output_includes_noon_start() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 9).unwrap();
        let events = vec![Event {
            id: "count-100".to_string(),
            title: "연애 시작 100일".to_string(),
            category: EventCategory::Count,
            date,
            reminder_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        }];

        let json: serde_json::Value = serde_json::from_str(&events_json(&events).unwrap()).unwrap();
        let first = &json[0];
        assert_eq!(first["id"], "count-100");
        assert_eq!(first["category"], "count");
        assert_eq!(first["date"], "2024-04-09");
        assert_eq!(first["reminder_date"], "2024-04-02");
        assert_eq!(first["starts_at"], "2024-04-09T12:00:00");
    }
}
