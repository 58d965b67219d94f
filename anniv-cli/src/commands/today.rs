use anniv_core::generate_events;
use anniv_core::reminder::due_today;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::Context;
use crate::render::{EMPTY, render_reminder_line};

pub fn run(ctx: &Context) -> Result<()> {
    let today = ctx.today();
    let events = generate_events(&ctx.settings, today);
    let due = due_today(&events, today);

    println!("{}", "오늘".bold());

    if due.is_empty() {
        println!("  {}", EMPTY.dimmed());
        return Ok(());
    }

    for event in due {
        println!("  {}", render_reminder_line(event));
    }

    Ok(())
}
