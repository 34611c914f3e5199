//! Thread-safe handle to an address book.
//!
//! Mutations take the write lock, so the record sequence and the key index
//! always change together. Reads share the read lock.

use super::address_book::AddressBook;
use std::sync::{Arc, PoisonError, RwLock};

/// A cloneable, lock-guarded address book.
///
/// # Example
///
/// ```
/// use contact_book::{Record, SharedAddressBook};
///
/// let book = SharedAddressBook::new();
/// book.write(|b| b.add_record(Record::new("Alice", "1234567890").unwrap()));
/// assert_eq!(book.read(|b| b.len()), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<RwLock<AddressBook>>,
}

impl SharedAddressBook {
    /// Create a new empty shared address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a read-only operation under the shared lock.
    pub fn read<T>(&self, f: impl FnOnce(&AddressBook) -> T) -> T {
        // Every mutation either completes or leaves the book untouched, so a
        // poisoned lock still guards a consistent book.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Run a mutating operation under the exclusive lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut AddressBook) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl From<AddressBook> for SharedAddressBook {
    fn from(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }
}
