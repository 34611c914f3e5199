//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded if present, without printing anything to stdout,
//! which is reserved for the command prompt.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of records per page for `show all`.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default prompt printed before each command is read.
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Configuration for the contact book prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Records per page when listing the whole book (default: 10)
    pub page_size: usize,

    /// Prompt text (default: "Enter command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page for `show all` (default: 10)
    /// - `CONTACT_BOOK_PROMPT`: Prompt text (default: "Enter command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;

        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            page_size,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(env::VarError::NotPresent) => Ok(default),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::Other(format!(
                "{} is not valid unicode",
                var_name
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: DEFAULT_PAGE_SIZE,
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
