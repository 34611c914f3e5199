//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is made of:
//! names, phone numbers, email addresses, and birthdays. Every field is a
//! [`Field`] parameterized by its [`FieldRule`], so invalid data cannot be
//! represented once construction succeeds.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule, BIRTHDAY_FORMAT};
pub use email::{Email, EmailRule};
pub use errors::ValidationError;
pub use field::{Field, FieldRule};
pub use name::{normalize_key, Name, NameRule};
pub use phone::{Phone, PhoneRule, PHONE_DIGITS};
