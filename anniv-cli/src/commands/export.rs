use std::path::{Path, PathBuf};

use anniv_core::generate_events;
use anniv_core::ics::{EXPORT_FILE_NAME, export_calendar};
use anyhow::{Context as _, Result};
use chrono::Utc;
use owo_colors::OwoColorize;

use crate::Context;

pub fn run(ctx: &Context, output: Option<PathBuf>) -> Result<()> {
    let events = generate_events(&ctx.settings, ctx.today());

    if events.is_empty() {
        println!("{}", "No events to export".dimmed());
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    let content = export_calendar(&events, Utc::now());
    write_export(&path, &content)?;

    println!(
        "{} Exported {} events to {}",
        "✓".green(),
        events.len(),
        path.display()
    );

    Ok(())
}

/// Write the calendar document, creating parent directories as needed.
fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write calendar file at {}", path.display()))?;

    Ok(())
}
