//! ConsolHelper - Main entry point
//!
//! Runs the interactive address book assistant on stdin/stdout.

use anyhow::Result;
use consol_helper::config::DEFAULT_LOG_LEVEL;
use consol_helper::{Config, ConsoleView, Dispatcher, JsonFileRepository, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the conversation)
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.as_str())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = JsonFileRepository::new(&config.data_file);
    let session = match Session::open(&repository) {
        Ok(session) => session,
        Err(e) => {
            error!(
                "Failed to load address book from {}: {}",
                config.data_file.display(),
                e
            );
            return Err(e.into());
        }
    };
    info!(contacts = session.book().len(), "Session started");

    let stdin = io::stdin();
    let mut view = ConsoleView::new(io::stdout());
    let mut dispatcher = Dispatcher::new();
    session.run(stdin.lock(), io::stdout(), &mut view, &mut dispatcher)?;

    info!("Session closed");
    Ok(())
}
