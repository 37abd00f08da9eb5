//! Index argument conversion for sparse sequences
//!
//! Indexed operations accept any primitive integer. Conversion and bounds
//! checking happen in one step so that negative values and values too wide
//! for `usize` share the out-of-range failure.

use crate::validation::{validate_index, validate_signed_index};
use crate::Result;
use crate::SeqError;

/// Trait for integer types usable as a sequence index
pub trait SeqIndex: Copy {
    /// Convert to a storage position, checking it against `len`
    ///
    /// Fails with [`SeqError::InvalidArgument`] unless the value lies in
    /// `[0, len)`.
    fn to_position(self, len: usize) -> Result<usize>;
}

macro_rules! impl_unsigned_index {
    ($($ty:ty),*) => {
        $(
            impl SeqIndex for $ty {
                fn to_position(self, len: usize) -> Result<usize> {
                    let index = usize::try_from(self).map_err(|_| SeqError::InvalidArgument)?;
                    validate_index(index, len)
                }
            }
        )*
    };
}

macro_rules! impl_signed_index {
    ($($ty:ty),*) => {
        $(
            impl SeqIndex for $ty {
                fn to_position(self, len: usize) -> Result<usize> {
                    let index = isize::try_from(self).map_err(|_| SeqError::InvalidArgument)?;
                    validate_signed_index(index, len)
                }
            }
        )*
    };
}

impl_unsigned_index!(u8, u16, u32, u64, u128, usize);
impl_signed_index!(i8, i16, i32, i64, i128, isize);
