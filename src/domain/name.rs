//! Contact name field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Rule for contact names: non-empty, stored trimmed with case preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;

    fn canonicalize(raw: &str) -> Result<String, ValidationError> {
        Ok(raw.trim().to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

/// A validated contact name.
pub type Name = Field<NameRule>;

impl Name {
    /// The lookup key for this name in an address book.
    pub fn key(&self) -> String {
        normalize_key(self.value())
    }
}

/// Normalize a name into an address book key.
///
/// Every read and write of the book index goes through this function.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed_case_preserved() {
        let name = Name::new("  Alice Smith ").unwrap();
        assert_eq!(name.value(), "Alice Smith");
        assert_eq!(name.to_string(), "Alice Smith");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new("").unwrap_err(), ValidationError::EmptyValue);
        assert_eq!(Name::new(" \t ").unwrap_err(), ValidationError::EmptyValue);
    }

    #[test]
    fn test_name_key() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(name.key(), "alice");
        assert_eq!(normalize_key(" ALICE "), "alice");
    }
}
