mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anniv_core::config::AppConfig;
use anniv_core::date::parse_date_input;
use anniv_core::settings::SUGGESTED_LABELS;
use anniv_core::{Settings, StoredSettings};
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anniv")]
#[command(about = "Anniversary reminders: upcoming milestones, notifications and .ics export")]
struct Cli {
    /// Use this date as "today" (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming anniversaries and holidays
    Events {
        /// Show every event instead of the first few
        #[arg(short, long)]
        all: bool,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show reminders due today
    Today,
    /// Show reminders due within the next 7 days
    Week,
    /// Write all events to an .ics file
    Export {
        /// Output path (defaults to anniversary-reminders.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Send desktop notifications for reminders due today
    Notify {
        /// Keep running and re-check periodically
        #[arg(short, long)]
        watch: bool,

        /// Seconds between checks in watch mode
        #[arg(long, default_value_t = commands::notify::DEFAULT_INTERVAL_SECS)]
        interval: u64,
    },
    /// Update the start date and label
    Set {
        /// Start date (YYYY-MM-DD); an empty string clears it
        #[arg(short, long)]
        start_date: Option<String>,

        /// Anniversary label
        #[arg(short = 't', long = "type", help = label_help())]
        label: Option<String>,
    },
    /// Show config paths and effective settings
    Config,
}

fn label_help() -> String {
    format!("Anniversary label (e.g. {})", SUGGESTED_LABELS.join(", "))
}

/// Everything a command needs, loaded once at startup.
pub struct Context {
    pub settings_path: PathBuf,
    pub stored: StoredSettings,
    pub settings: Settings,
    pub today_override: Option<NaiveDate>,
}

impl Context {
    fn load(today: Option<&str>) -> Result<Self> {
        let today_override = match today {
            Some(text) => Some(
                parse_date_input(text)
                    .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", text))?,
            ),
            None => None,
        };

        let config = AppConfig::load().context("Failed to load config")?;
        let settings_path = config.settings_path()?;
        let stored = StoredSettings::load_from(&settings_path);
        let settings = config.settings(&stored);

        Ok(Context {
            settings_path,
            stored,
            settings,
            today_override,
        })
    }

    /// The reference date, read fresh from the local clock unless overridden.
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let ctx = Context::load(cli.today.as_deref())?;

    match cli.command {
        Commands::Events { all, json } => commands::events::run(&ctx, all, json),
        Commands::Today => commands::today::run(&ctx),
        Commands::Week => commands::week::run(&ctx),
        Commands::Export { output } => commands::export::run(&ctx, output),
        Commands::Notify { watch, interval } => commands::notify::run(&ctx, watch, interval).await,
        Commands::Set { start_date, label } => commands::set::run(ctx, start_date, label),
        Commands::Config => commands::config::run(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_today_after_subcommand() {
        let cli = Cli::try_parse_from(["anniv", "week", "--today", "2024-12-18"]).unwrap();
        assert_eq!(cli.today.as_deref(), Some("2024-12-18"));
        assert!(matches!(cli.command, Commands::Week));
    }

    #[test]
    fn parses_set_with_type_flag() {
        let cli = Cli::try_parse_from([
            "anniv",
            "set",
            "--start-date",
            "2024-01-01",
            "--type",
            "결혼",
        ])
        .unwrap();

        match cli.command {
            Commands::Set { start_date, label } => {
                assert_eq!(start_date.as_deref(), Some("2024-01-01"));
                assert_eq!(label.as_deref(), Some("결혼"));
            }
            _ => panic!("expected set command"),
        }
    }

    #[test]
    fn notify_interval_defaults_to_an_hour() {
        let cli = Cli::try_parse_from(["anniv", "notify", "--watch"]).unwrap();
        match cli.command {
            Commands::Notify { watch, interval } => {
                assert!(watch);
                assert_eq!(interval, 3600);
            }
            _ => panic!("expected notify command"),
        }
    }

    #[test]
    fn today_override_wins_over_clock() {
        let ctx = Context {
            settings_path: PathBuf::from("unused.json"),
            stored: StoredSettings::default(),
            settings: Settings::default(),
            today_override: NaiveDate::from_ymd_opt(2030, 1, 1),
        };
        assert_eq!(ctx.today(), NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
    }
}
