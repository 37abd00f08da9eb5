//! sparseq - fixed-length sparse sequences
//!
//! A sparse sequence has a logical length fixed at construction, but only
//! stores the positions that have been materialized. Every other position
//! reads as the element type's default value.
//!
//! ## Architecture
//!
//! - **sparseq-core**: error type, index validation, the [`SparseSequence`]
//!   trait and the [`Dense`] iterator (no storage, `no_std`)
//! - **sparseq**: concrete storage backends
//!
//! ## Quick Start
//!
//! ```rust
//! use sparseq::prelude::*;
//!
//! fn example() -> sparseq::Result<()> {
//!     let mut seq = SparseVec::<i32>::new(12);
//!     for index in (0..12).step_by(2) {
//!         *seq.get_or_insert_mut(index)? = index as i32;
//!     }
//!
//!     assert_eq!(seq.get(4)?, 4);
//!     assert_eq!(seq.materialized_count(), 6);
//!     assert_eq!(seq.to_string(), "[0 0 2 0 4 0 6 0 8 0 10 0 ]");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! `get` never allocates an entry; `get_or_insert_mut` always does for an
//! absent index, whether or not a value is written through the returned
//! reference.
//!
//! ## Backends
//!
//! - [`SparseVec`]: sorted vector, binary-search lookup, O(entries) insert
//! - [`BTreeSparseVec`]: ordered map, O(log entries) insert
//!
//! Neither backend synchronizes access. Wrap an instance in a `Mutex` to
//! share it across threads.

// Re-export core abstractions
pub use sparseq_core::{
    // Core traits
    DenseOperations, SeqIndex, SparseSequence,
    // Dense view
    write_dense, Dense,
    // Error handling
    Result, SeqError,
    // Constants
    DEFAULT_LEN,
};

// Storage backends
pub mod btree;
pub mod sorted_vec;

pub use btree::BTreeSparseVec;
pub use sorted_vec::SparseVec;

/// Everything needed to construct and use a sparse sequence
pub mod prelude {
    pub use crate::{BTreeSparseVec, DenseOperations, SeqError, SparseSequence, SparseVec};
}

#[cfg(test)]
mod conformance;
