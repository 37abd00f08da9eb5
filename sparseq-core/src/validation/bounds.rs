//! Index bounds validation against a logical length

use crate::SeqError;

/// Validate that `index` addresses a position in `[0, len)`
///
/// Returns the index unchanged on success so callers can chain with `?`.
pub const fn validate_index(index: usize, len: usize) -> Result<usize, SeqError> {
    if index >= len {
        return Err(SeqError::InvalidArgument);
    }

    Ok(index)
}

/// Validate a signed index against a logical length
///
/// Negative indices are rejected outright; there is no wraparound.
pub const fn validate_signed_index(index: isize, len: usize) -> Result<usize, SeqError> {
    if index < 0 {
        return Err(SeqError::InvalidArgument);
    }

    validate_index(index as usize, len)
}
