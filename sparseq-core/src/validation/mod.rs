//! Index validation for sparse sequences
//!
//! Pure bounds checks with no storage access. Every indexed operation
//! runs its argument through here before touching entries.

pub mod bounds;

pub use bounds::{validate_index, validate_signed_index};
