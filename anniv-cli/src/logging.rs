//! Diagnostic logging to stderr.
//!
//! User-facing output goes to stdout; tracing output is for troubleshooting
//! and stays quiet unless `ANNIV_LOG` or `--verbose` asks for more.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ANNIV_LOG";

pub fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(())
}
