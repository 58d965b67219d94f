use anniv_core::config::AppConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let config_path = AppConfig::config_path()?;
    let settings = &ctx.settings;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Settings:   {}", ctx.settings_path.display());
    println!();

    println!("{}", "Settings".bold());
    println!(
        "  Start date: {}",
        settings
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("  Label:      {}", settings.label);
    println!("  Inclusive:  {}", settings.inclusive);
    println!("  Counts:     {}", join(settings.counts.iter()));
    println!("  Years:      {}", join(settings.years.iter()));
    println!("  Holidays:   {}", join(settings.holidays.iter()));
    println!("  Years ahead: {}", settings.years_ahead);
    println!("  Today:      {}", ctx.today());

    Ok(())
}

fn join<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
