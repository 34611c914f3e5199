//! Lazy page-wise iteration over an address book.

use crate::models::Record;
use std::collections::btree_map::Values;
use std::iter::FusedIterator;

/// Successive pages of at most `page_size` records, in insertion order.
///
/// Pages are built on demand. Once exhausted the iterator keeps returning
/// `None`; call [`AddressBook::iterate`](super::AddressBook::iterate) again
/// to start over.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Values<'a, u64, Record>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    /// `page_size` must be non-zero; the address book checks this.
    pub(crate) fn new(records: Values<'a, u64, Record>, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self { records, page_size }
    }

    /// Maximum number of records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&'a Record> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
