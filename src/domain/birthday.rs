//! Birthday field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Display format for birthdays (zero-padded day.month.year).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Accepted input shape: `D.M.YYYY` with optional zero padding.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").expect("Invalid birthday regex")
});

/// Rule for birthdays: a real calendar date in `D.M.YYYY` form, not after today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl BirthdayRule {
    /// Parse a birthday against an explicit reference date.
    pub fn parse_as_of(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
        let invalid = || ValidationError::InvalidDateFormat(raw.to_string());

        let caps = BIRTHDAY_PATTERN.captures(raw.trim()).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

        if date > today {
            return Err(ValidationError::FutureBirthday(date));
        }

        Ok(date)
    }
}

impl FieldRule for BirthdayRule {
    type Value = NaiveDate;

    fn canonicalize(raw: &str) -> Result<NaiveDate, ValidationError> {
        Self::parse_as_of(raw, Local::now().date_naive())
    }

    fn render(value: &NaiveDate) -> String {
        value.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// A validated birthday.
pub type Birthday = Field<BirthdayRule>;

impl Birthday {
    /// Create a birthday validated against `today` instead of the local date.
    ///
    /// # Errors
    ///
    /// Same as [`Field::new`].
    pub fn new_as_of(raw: impl Into<String>, today: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_with(raw, |raw| BirthdayRule::parse_as_of(raw, today))
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        *self.value()
    }

    /// The next anniversary on or after `today`.
    ///
    /// A 29 February birthday falls on 1 March in non-leap years.
    pub fn next_anniversary(&self, today: NaiveDate) -> NaiveDate {
        let this_year = anniversary_in(self.date(), today.year());
        if this_year < today {
            anniversary_in(self.date(), today.year() + 1)
        } else {
            this_year
        }
    }

    /// Days from `today` until the next anniversary (0 when it is today).
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_anniversary(today) - today).num_days()
    }
}

fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}
