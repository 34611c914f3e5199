//! Phone number field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Number of digits a phone number must carry.
pub const PHONE_DIGITS: usize = 10;

/// Rule for phone numbers.
///
/// # Validation Rules
///
/// - Every ASCII digit in the input is kept, everything else is dropped
/// - Exactly 10 digits must remain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;

    fn canonicalize(raw: &str) -> Result<String, ValidationError> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(digits)
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

/// A validated phone number, stored as its 10 digits.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("(123) 456-7890").unwrap();
/// assert_eq!(phone.digits(), "1234567890");
/// ```
pub type Phone = Field<PhoneRule>;

impl Phone {
    /// The digits-only phone number.
    pub fn digits(&self) -> &str {
        self.value()
    }
}
