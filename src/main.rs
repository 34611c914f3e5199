//! Contact Book - Main entry point
//!
//! Runs the interactive command prompt on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{Config, Interpreter};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for the prompt)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

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

    info!(page_size = config.page_size, "Starting contact book");

    let mut interpreter = Interpreter::new(&config);
    let stdin = io::stdin();
    interpreter.run(stdin.lock(), io::stdout().lock(), &config.prompt)?;

    info!(
        contacts = interpreter.book().len(),
        "Contact book session ended"
    );
    Ok(())
}
