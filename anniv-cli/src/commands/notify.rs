use std::time::Duration;

use anniv_core::generate_events;
use anniv_core::notify::{Notification, NotificationLedger};
use anniv_core::reminder::due_today;
use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{debug, info, warn};

use crate::Context;

/// Re-check hourly so a day rollover is noticed promptly.
pub const DEFAULT_INTERVAL_SECS: u64 = 60 * 60;

const APP_NAME: &str = "anniv";

pub async fn run(ctx: &Context, watch: bool, interval: u64) -> Result<()> {
    let mut ledger = NotificationLedger::new();

    if !watch {
        let sent = dispatch_due(ctx, &mut ledger);
        for note in &sent {
            println!("{} {}", "🔔".yellow(), note.body);
        }
        if sent.is_empty() {
            println!("{}", "No reminders due today".dimmed());
        }
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    println!(
        "Watching for reminders every {}s (Ctrl-C to stop)",
        interval.max(1)
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let sent = dispatch_due(ctx, &mut ledger);
                debug!(sent = sent.len(), total = ledger.len(), "Checked reminders");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping reminder watch");
                break;
            }
        }
    }

    Ok(())
}

/// Recompute events for the current day and show anything not yet announced.
fn dispatch_due(ctx: &Context, ledger: &mut NotificationLedger) -> Vec<Notification> {
    let today = ctx.today();
    let events = generate_events(&ctx.settings, today);
    let pending = ledger.pending(due_today(&events, today));

    for note in &pending {
        show(note);
    }

    pending
}

fn show(note: &Notification) {
    let result = notify_rust::Notification::new()
        .appname(APP_NAME)
        .summary(&note.title)
        .body(&note.body)
        .show();

    match result {
        Ok(_) => info!(key = %note.key, "Sent notification"),
        Err(e) => warn!(key = %note.key, error = %e, "Failed to show notification"),
    }
}
