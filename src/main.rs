// src/main.rs

use anyhow::Result;
use clap::Parser;
use ignorewalk::cli::Cli;
use ignorewalk::config::{Config, ListOptions};
use ignorewalk::errors::Error;
use ignorewalk::list_files;
use ignorewalk::signal::setup_signal_handler;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "ignorewalk=debug".parse()?
                } else {
                    "ignorewalk=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting ignorewalk v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;
    let options = ListOptions::from(&cli);
    log::debug!("Configuration built successfully: {:?}", config);

    let token = setup_signal_handler()?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let result = list_files(&config, &options, &token, &mut writer);

    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            Error::Io { ref source, .. } if source.kind() == io::ErrorKind::BrokenPipe => {
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
