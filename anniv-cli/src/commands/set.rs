use anniv_core::date::parse_date_input;
use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::Context;

pub fn run(ctx: Context, start_date: Option<String>, label: Option<String>) -> Result<()> {
    let mut stored = ctx.stored;

    if start_date.is_none() && label.is_none() {
        println!("  시작일: {}", display_or_none(&stored.start_date));
        println!("  유형:   {}", stored.label());
        return Ok(());
    }

    if let Some(start_date) = start_date {
        let start_date = start_date.trim().to_string();
        if !start_date.is_empty() && parse_date_input(&start_date).is_none() {
            warn!(input = %start_date, "Start date does not parse, only holidays will be shown");
            println!(
                "{} '{}' is not a valid YYYY-MM-DD date; only holidays will be shown",
                "!".yellow(),
                start_date
            );
        }
        stored.start_date = start_date;
    }

    if let Some(label) = label {
        stored.label = label.trim().to_string();
    }

    stored
        .save_to(&ctx.settings_path)
        .with_context(|| format!("Failed to save settings to {}", ctx.settings_path.display()))?;

    println!("{} Saved settings", "✓".green());
    println!("  시작일: {}", display_or_none(&stored.start_date));
    println!("  유형:   {}", stored.label());

    Ok(())
}

fn display_or_none(value: &str) -> String {
    if value.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        value.to_string()
    }
}
