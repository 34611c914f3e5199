//! Data models for contact book entities.
//!
//! A [`Record`] aggregates the validated fields of one contact.

pub mod record;

pub use record::Record;
