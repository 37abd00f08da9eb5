//! Abstract interfaces for sparse sequences
//!
//! Traits here are pure interfaces; storage backends live in the `sparseq`
//! crate.

pub mod index;
pub mod sequence;

pub use index::SeqIndex;
#[cfg(feature = "alloc")]
pub use sequence::DenseOperations;
pub use sequence::SparseSequence;
