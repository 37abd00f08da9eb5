//! Core sparse sequence abstraction
//!
//! This module defines the trait that every storage backend implements.
//! Backends supply the binary-search primitives (`lookup` and
//! `get_or_insert_mut`) and the sorted entry cursor; reads, writes and the
//! dense view are layered on top.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::index::SeqIndex;
use crate::dense::Dense;
use crate::Result;

/// Fixed-length sequence that only stores materialized positions
///
/// Positions without an entry read as `Self::Element::default()`. The
/// logical length is set at construction and never changes.
pub trait SparseSequence {
    /// The element type stored in this sequence
    type Element: Default + Clone;

    /// Iterator over materialized `(index, value)` pairs, ascending by index
    type Entries<'a>: Iterator<Item = (usize, &'a Self::Element)>
    where
        Self: 'a;

    /// Logical length of the sequence
    fn len(&self) -> usize;

    /// Whether the logical length is zero
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of materialized entries
    fn materialized_count(&self) -> usize;

    /// Drop every entry, leaving the logical length unchanged
    fn clear(&mut self);

    /// Find the stored value at an already validated position
    ///
    /// Returns `None` when the position has no entry. Never mutates.
    fn lookup(&self, position: usize) -> Option<&Self::Element>;

    /// Get a mutable reference to the value at `index`, materializing it
    ///
    /// An absent index gets a new entry holding the default value, so the
    /// materialized count grows by one even if nothing is written through
    /// the returned reference. Fails with
    /// [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument) when
    /// `index` is outside `[0, len)`.
    fn get_or_insert_mut<I: SeqIndex>(&mut self, index: I) -> Result<&mut Self::Element>;

    /// Iterate materialized entries in ascending index order
    fn entries(&self) -> Self::Entries<'_>;

    /// Read the value at `index` without materializing it
    ///
    /// Returns a clone of the stored value or the default. Fails with
    /// [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument) when
    /// `index` is outside `[0, len)`.
    fn get<I: SeqIndex>(&self, index: I) -> Result<Self::Element> {
        let position = index.to_position(self.len())?;
        Ok(self.lookup(position).cloned().unwrap_or_default())
    }

    /// Check whether `index` has a backing entry
    fn is_materialized<I: SeqIndex>(&self, index: I) -> Result<bool> {
        let position = index.to_position(self.len())?;
        Ok(self.lookup(position).is_some())
    }

    /// Store `value` at `index`, materializing the entry if needed
    fn set<I: SeqIndex>(&mut self, index: I, value: Self::Element) -> Result<()> {
        *self.get_or_insert_mut(index)? = value;
        Ok(())
    }

    /// Iterate all `len` logical values, defaults included
    ///
    /// The iterator borrows the sequence, so no structural mutation can
    /// happen while it is alive. Call again to restart.
    fn iter(&self) -> Dense<'_, Self::Element, Self::Entries<'_>> {
        Dense::new(self.len(), self.entries())
    }
}

/// Extension trait for dense materialization (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait DenseOperations: SparseSequence {
    /// Collect the dense view into a vector of length `len()`
    fn to_dense_vec(&self) -> Vec<Self::Element>;
}

#[cfg(feature = "alloc")]
impl<S: SparseSequence> DenseOperations for S {
    fn to_dense_vec(&self) -> Vec<Self::Element> {
        self.iter().collect()
    }
}
