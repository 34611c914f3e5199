//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Email, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name and phone number, plus optional email and birthday.
///
/// Every field is validated on construction and on every edit, so a record
/// always holds a valid name and phone and its optional fields are either
/// absent or valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    phone: Phone,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with only the required fields.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first field that fails.
    pub fn new(name: &str, phone: &str) -> Result<Self, ValidationError> {
        Self::with_details(name, phone, None, None)
    }

    /// Create a record with optional email and birthday.
    ///
    /// An invalid optional field rejects the whole record.
    pub fn with_details(
        name: &str,
        phone: &str,
        email: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phone: Phone::new(phone)?,
            email: email.map(Email::new).transpose()?,
            birthday: birthday.map(Birthday::new).transpose()?,
        })
    }

    /// The contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// The email address, if set.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// The birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The address book key for this record.
    pub fn key(&self) -> String {
        self.name.key()
    }

    /// Replace the phone number. The record is unchanged on error.
    pub fn edit_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phone.set_value(raw)
    }

    /// Replace or set the birthday, returning the stored value.
    ///
    /// The record is unchanged on error.
    pub fn edit_birthday(&mut self, raw: &str) -> Result<&Birthday, ValidationError> {
        let birthday = Birthday::new(raw)?;
        Ok(&*self.birthday.insert(birthday))
    }

    /// Replace or set the email address. The record is unchanged on error.
    pub fn edit_email(&mut self, raw: &str) -> Result<(), ValidationError> {
        match self.email.as_mut() {
            Some(email) => email.set_value(raw),
            None => {
                self.email = Some(Email::new(raw)?);
                Ok(())
            }
        }
    }

    /// Remove the birthday, returning it.
    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Remove the email address, returning it.
    pub fn clear_email(&mut self) -> Option<Email> {
        self.email.take()
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    ///
    /// Returns `None` when no birthday is set, and `Some(0)` when the
    /// birthday is today.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)?;
        if let Some(ref email) = self.email {
            write!(f, ", email: {}", email)?;
        }
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
