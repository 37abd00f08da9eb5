//! Tree-backed sparse sequence
//!
//! Same contract as [`SparseVec`](crate::SparseVec), but entries live in a
//! `BTreeMap` keyed by index, so materializing never relocates existing
//! entries and costs O(log entries).

use core::fmt::{self, Display, Formatter};
use sparseq_core::{write_dense, Dense, Result, SeqIndex, SparseSequence, DEFAULT_LEN};
use std::collections::btree_map::{self, BTreeMap};

/// Sparse sequence backed by an ordered map of entries
#[derive(Debug, Clone)]
pub struct BTreeSparseVec<T> {
    len: usize,
    entries: BTreeMap<usize, T>,
}

impl<T> BTreeSparseVec<T> {
    /// Create an empty sequence of logical length `len`
    pub fn new(len: usize) -> Self {
        Self {
            len,
            entries: BTreeMap::new(),
        }
    }
}

impl<T> Default for BTreeSparseVec<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LEN)
    }
}

impl<T: Default + Clone> SparseSequence for BTreeSparseVec<T> {
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
        tracing::trace!(dropped = self.entries.len(), "clearing btree sparse vec");

        self.entries.clear();
    }

    fn lookup(&self, position: usize) -> Option<&T> {
        self.entries.get(&position)
    }

    fn get_or_insert_mut<I: SeqIndex>(&mut self, index: I) -> Result<&mut T> {
        let position = index.to_position(self.len)?;

        let value = match self.entries.entry(position) {
            btree_map::Entry::Occupied(entry) => entry.into_mut(),
            btree_map::Entry::Vacant(entry) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = position, "materialized entry");

                entry.insert(T::default())
            }
        };

        Ok(value)
    }

    fn entries(&self) -> Entries<'_, T> {
        Entries {
            inner: self.entries.iter(),
        }
    }
}

impl<T: Default + Clone + Display> Display for BTreeSparseVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_dense(f, self.iter())
    }
}

impl<'a, T: Default + Clone> IntoIterator for &'a BTreeSparseVec<T> {
    type Item = T;
    type IntoIter = Dense<'a, T, Entries<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the materialized entries of a [`BTreeSparseVec`]
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    inner: btree_map::Iter<'a, usize, T>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, value)| (*index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
