//! Shared test fixtures for integration tests.

use contact_book::{AddressBook, Record};

/// Build a record, panicking on invalid test data.
pub fn record(name: &str, phone: &str) -> Record {
    Record::new(name, phone).expect("fixture record should be valid")
}

/// Build a record with a birthday in `D.M.YYYY` form.
#[allow(dead_code)]
pub fn record_with_birthday(name: &str, phone: &str, birthday: &str) -> Record {
    Record::with_details(name, phone, None, Some(birthday))
        .expect("fixture record should be valid")
}

/// The two-contact book used by the lookup scenarios.
#[allow(dead_code)]
pub fn alice_and_bob() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "1234567890"));
    book.add_record(record("Bob", "0987654321"));
    book
}

/// A book of `count` numbered contacts with distinct phone numbers.
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    (0..count)
        .map(|i| record(&format!("Contact{}", i), &format!("{:010}", i)))
        .collect()
}

/// Names of `records`, in order.
#[allow(dead_code)]
pub fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
    records
        .into_iter()
        .map(|r| r.name().value().clone())
        .collect()
}
