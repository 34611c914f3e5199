//! Address book storage.
//!
//! This module provides the insertion-ordered record store, its lazy page
//! iterator, and a lock-guarded handle for sharing a book across threads.

pub mod address_book;
pub mod pages;
pub mod shared;

pub use address_book::AddressBook;
pub use pages::Pages;
pub use shared::SharedAddressBook;
