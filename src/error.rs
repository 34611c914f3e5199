//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Operation called with an argument outside its contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Field validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised when a command line is missing required arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `add`/`change` without both a name and a phone number
    #[error("Enter name and phone number separated by a space")]
    MissingNameAndPhone,

    /// `birthday` without both a name and a date
    #[error("Enter name and birthday separated by a space")]
    MissingNameAndBirthday,

    /// A command that needs a contact name got none
    #[error("Enter a contact name")]
    MissingName,

    /// `find` without a query
    #[error("Enter a search query")]
    MissingQuery,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
