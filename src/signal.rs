// src/signal.rs

//! Ctrl+C handling for the command-line front end.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Registers a Ctrl+C (SIGINT/SIGTERM) handler that cancels the returned token.
///
/// # Errors
/// Returns an error if the signal handler cannot be set.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C signal received, stopping the walk.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
