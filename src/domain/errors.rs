//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur while validating a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value is empty after trimming.
    EmptyValue,

    /// The provided phone number does not contain exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday does not match `D.M.YYYY` or is not a real date.
    InvalidDateFormat(String),

    /// The provided birthday lies after the reference date.
    FutureBirthday(NaiveDate),

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "empty value"),
            Self::InvalidPhone(_) => write!(f, "Invalid phone number"),
            Self::InvalidDateFormat(_) => write!(f, "Invalid date format"),
            Self::FutureBirthday(_) => write!(f, "Birthday date can't be in the future"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::EmptyValue.to_string(), "empty value");
        assert_eq!(
            ValidationError::InvalidPhone("12345".to_string()).to_string(),
            "Invalid phone number"
        );
        assert_eq!(
            ValidationError::InvalidDateFormat("2000-01-01".to_string()).to_string(),
            "Invalid date format"
        );
        let date = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
        assert_eq!(
            ValidationError::FutureBirthday(date).to_string(),
            "Birthday date can't be in the future"
        );
        assert_eq!(
            ValidationError::InvalidEmail("nope".to_string()).to_string(),
            "Invalid email address: nope"
        );
    }
}
