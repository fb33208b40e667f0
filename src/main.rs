//! Contact Assistant - Main entry point
//!
//! Runs the interactive session on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::{Context, Result};
use chrono::Local;
use contact_assistant::{Assistant, Config};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        reminder_window_days = config.reminder_window_days,
        max_name_suggestions = config.max_name_suggestions,
        "Configuration loaded"
    );

    let mut assistant = Assistant::new(config);
    assistant
        .run(io::stdin().lock(), io::stdout().lock(), || {
            Local::now().date_naive()
        })
        .context("Session I/O failed")?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
