//! Contact Book - an in-memory contact registry with validated fields.
//!
//! This library stores named contact records carrying validated phone numbers,
//! optional email addresses, and optional birthdays, and supports lookup,
//! editing, substring search, and paged enumeration.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, email, birthday)
//! - **models**: The contact `Record` built from those fields
//! - **book**: The insertion-ordered `AddressBook`, its page iterator, and a lock-guarded handle
//! - **interpreter**: Command parsing and the line-based prompt
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod interpreter;
pub mod models;

// Re-export commonly used types
pub use book::{AddressBook, Pages, SharedAddressBook};
pub use config::Config;
pub use domain::{Birthday, Email, Field, FieldRule, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, CommandError, ConfigError};
pub use interpreter::{Command, Interpreter, Reply};
pub use models::Record;
