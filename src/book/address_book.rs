//! In-memory address book with case-insensitive name keys.
//!
//! Records are kept in insertion order. A separate index maps each
//! normalized name key to the record's position, and both structures are
//! updated together by every mutation.

use super::pages::Pages;
use crate::domain::normalize_key;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// An ordered collection of contact records keyed by lower-cased name.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("Alice", "1234567890").unwrap());
///
/// assert!(book.lookup("ALICE").is_some());
/// assert_eq!(book.find_records("456").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    /// Records ordered by insertion sequence number
    records: BTreeMap<u64, Record>,

    /// Normalized name key -> insertion sequence number
    index: HashMap<String, u64>,

    next_seq: u64,
}

impl AddressBook {
    /// Create a new empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record stored under the same key.
    ///
    /// A replaced record keeps its original position in iteration order.
    /// Returns the record that was replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.key();

        if let Some(&seq) = self.index.get(&key) {
            return self.records.insert(seq, record);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(key, seq);
        self.records.insert(seq, record);
        None
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record has that name.
    pub fn remove_record(&mut self, name: &str) -> BookResult<Record> {
        let key = normalize_key(name);
        let seq = self
            .index
            .remove(&key)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;

        self.records
            .remove(&seq)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Look up a record by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&Record> {
        let seq = self.index.get(&normalize_key(name))?;
        self.records.get(seq)
    }

    /// Look up a record for in-place editing.
    ///
    /// `Record` exposes no way to change its name, so edits cannot break
    /// the key index.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Record> {
        let seq = self.index.get(&normalize_key(name))?;
        self.records.get_mut(seq)
    }

    /// Check whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize_key(name))
    }

    /// Replace the phone number of the record stored under `name`.
    ///
    /// Returns the updated record.
    pub fn edit_phone(&mut self, name: &str, raw: &str) -> BookResult<&Record> {
        let record = self
            .lookup_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        record.edit_phone(raw)?;
        Ok(&*record)
    }

    /// Set or replace the birthday of the record stored under `name`.
    ///
    /// Returns the updated record.
    pub fn edit_birthday(&mut self, name: &str, raw: &str) -> BookResult<&Record> {
        let record = self
            .lookup_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        record.edit_birthday(raw)?;
        Ok(&*record)
    }

    /// Find every record whose name or phone digits contain `query`.
    ///
    /// Name matching is case-sensitive against the stored name. Results
    /// are in insertion order; an empty query matches every record.
    pub fn find_records(&self, query: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| {
                record.name().value().contains(query) || record.phone().digits().contains(query)
            })
            .collect()
    }

    /// Iterate over the book in pages of at most `page_size` records.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidArgument` if `page_size` is zero.
    pub fn iterate(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Pages::new(self.records.values(), page_size))
    }

    /// Records whose next birthday is at most `within_days` days after `today`.
    ///
    /// Sorted soonest first; records with the same distance stay in
    /// insertion order.
    pub fn upcoming_birthdays(&self, within_days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, u64, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}
