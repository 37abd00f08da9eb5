//! Array-backed sparse sequence
//!
//! Entries live in a `Vec` kept strictly ascending by index. Lookups are a
//! lower-bound binary search; materializing an index in the middle shifts
//! every later entry one slot to the right.

use core::fmt::{self, Display, Formatter};
use sparseq_core::{write_dense, Dense, Result, SeqIndex, SparseSequence, DEFAULT_LEN};

/// Stored `(index, value)` pair
#[derive(Debug, Clone)]
struct Entry<T> {
    index: usize,
    value: T,
}

/// Sparse sequence backed by a sorted vector of entries
#[derive(Debug, Clone)]
pub struct SparseVec<T> {
    /// Logical length
    len: usize,
    /// Materialized entries, strictly ascending by index
    entries: Vec<Entry<T>>,
}

impl<T> SparseVec<T> {
    /// Create an empty sequence of logical length `len`
    pub fn new(len: usize) -> Self {
        Self {
            len,
            entries: Vec::new(),
        }
    }

    /// Create an empty sequence with room for `capacity` entries
    pub fn with_capacity(len: usize, capacity: usize) -> Self {
        Self {
            len,
            entries: Vec::with_capacity(capacity.min(len)),
        }
    }

    /// Number of entries the sequence can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Locate `position` among the entries
    ///
    /// `Ok(slot)` when an entry exists at `slot`, otherwise `Err(slot)` with
    /// the slot where it would be inserted to keep the order.
    fn search(&self, position: usize) -> core::result::Result<usize, usize> {
        let slot = self.entries.partition_point(|entry| entry.index < position);
        match self.entries.get(slot) {
            Some(entry) if entry.index == position => Ok(slot),
            _ => Err(slot),
        }
    }
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LEN)
    }
}

impl<T: Default + Clone> SparseSequence for SparseVec<T> {
    type Element = T;
    type Entries<'a> = Entries<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn materialized_count(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(dropped = self.entries.len(), "clearing sparse vec");

        self.entries.clear();
    }

    fn lookup(&self, position: usize) -> Option<&T> {
        self.search(position)
            .ok()
            .map(|slot| &self.entries[slot].value)
    }

    fn get_or_insert_mut<I: SeqIndex>(&mut self, index: I) -> Result<&mut T> {
        let position = index.to_position(self.len)?;

        let slot = match self.search(position) {
            Ok(slot) => slot,
            Err(slot) => {
                self.entries.insert(
                    slot,
                    Entry {
                        index: position,
                        value: T::default(),
                    },
                );

                #[cfg(feature = "tracing")]
                tracing::trace!(
                    index = position,
                    materialized = self.entries.len(),
                    "materialized entry"
                );

                slot
            }
        };

        Ok(&mut self.entries[slot].value)
    }

    fn entries(&self) -> Entries<'_, T> {
        Entries {
            inner: self.entries.iter(),
        }
    }
}

impl<T: Default + Clone + Display> Display for SparseVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_dense(f, self.iter())
    }
}

impl<'a, T: Default + Clone> IntoIterator for &'a SparseVec<T> {
    type Item = T;
    type IntoIter = Dense<'a, T, Entries<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the materialized entries of a [`SparseVec`]
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    inner: core::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.index, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
