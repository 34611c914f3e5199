//! Email address field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Rule for email addresses.
///
/// # Validation Rules
///
/// - Must contain exactly one '@' symbol
/// - Must have a local part before '@'
/// - Must have a domain part after '@' with at least one '.'
/// - Domain labels must not be empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailRule;

impl EmailRule {
    fn is_valid(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        if !domain.contains('.') {
            return false;
        }

        domain.split('.').all(|part| !part.is_empty())
    }
}

impl FieldRule for EmailRule {
    type Value = String;

    fn canonicalize(raw: &str) -> Result<String, ValidationError> {
        let email = raw.trim();

        if !Self::is_valid(email) {
            return Err(ValidationError::InvalidEmail(raw.to_string()));
        }

        Ok(email.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

/// A validated email address.
pub type Email = Field<EmailRule>;
