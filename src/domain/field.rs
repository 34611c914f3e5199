//! Generic validated field holder.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Validation and canonicalization rule for one kind of field.
///
/// Each field kind (name, phone, birthday, email) is a zero-sized rule type.
/// [`Field`] runs the rule on construction and on every reassignment.
pub trait FieldRule {
    /// Normalized representation stored after validation.
    type Value: Clone + fmt::Debug + PartialEq + Eq;

    /// Validate `raw` and produce its canonical value.
    ///
    /// `raw` is already known to be non-empty after trimming.
    fn canonicalize(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Render a canonical value back to text.
    fn render(value: &Self::Value) -> String;
}

/// A value that always satisfies the rule `R`.
///
/// The canonical value is never observable in an invalid state:
/// [`Field::set_value`] validates first and replaces both the raw input
/// and the canonical value only on success.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::new("123-456-7890").unwrap();
/// assert_eq!(phone.value(), "1234567890");
///
/// assert!(phone.set_value("12345").is_err());
/// assert_eq!(phone.value(), "1234567890");
/// ```
pub struct Field<R: FieldRule> {
    raw: String,
    value: R::Value,
    rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    /// Create a new field from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyValue` for blank input, or the rule's
    /// own error when the input does not satisfy it.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new_with(raw, R::canonicalize)
    }

    /// Create a field using `canonicalize` in place of the rule's own.
    ///
    /// Blank input is still rejected before `canonicalize` runs.
    pub(crate) fn new_with(
        raw: impl Into<String>,
        canonicalize: impl FnOnce(&str) -> Result<R::Value, ValidationError>,
    ) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let value = Self::validate_with(&raw, canonicalize)?;
        Ok(Self {
            raw,
            value,
            rule: PhantomData,
        })
    }

    /// Replace the field with a new raw value.
    ///
    /// # Errors
    ///
    /// Same as [`Field::new`]. On error the field keeps its previous value.
    pub fn set_value(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        let raw = raw.into();
        let value = Self::validate_with(&raw, R::canonicalize)?;
        self.raw = raw;
        self.value = value;
        Ok(())
    }

    /// The canonical value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// The raw input the canonical value was derived from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn validate_with(
        raw: &str,
        canonicalize: impl FnOnce(&str) -> Result<R::Value, ValidationError>,
    ) -> Result<R::Value, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyValue);
        }
        canonicalize(raw)
    }
}

impl<R: FieldRule> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: FieldRule> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("raw", &self.raw)
            .field("value", &self.value)
            .finish()
    }
}

// Equality is by canonical value: "123-456-7890" and "1234567890" are the same phone.
impl<R: FieldRule> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for Field<R> {}

// Display support - the canonical rendering
impl<R: FieldRule> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", R::render(&self.value))
    }
}

// Serde support - serialize the canonical rendering
impl<R: FieldRule> Serialize for Field<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        R::render(&self.value).serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}
