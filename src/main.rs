//! Runs every date comparison demonstration against the system clock,
//! printing the results to standard output.
//!
//! Logging goes to standard error, filtered by `RUST_LOG` (default `warn`).

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use datecmp::SystemClock;
use datecmp::demo::{run_all, Settings};


fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let settings = Settings::default();
    info!(?settings, "running date comparisons");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_all(&settings, &SystemClock, &mut out).context("date comparison failed")?;

    Ok(())
}
