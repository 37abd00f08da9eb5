#![no_std]

//! sparseq core - sparse sequence definitions
//!
//! This crate provides the error type, index validation, the
//! [`SparseSequence`] trait and the dense iterator shared by every storage
//! backend. It owns no storage itself.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constants;
pub mod dense;
pub mod error;
pub mod traits;
pub mod validation;

pub use constants::DEFAULT_LEN;
pub use dense::{write_dense, Dense};
pub use error::*;
pub use traits::*;
pub use validation::{validate_index, validate_signed_index};
