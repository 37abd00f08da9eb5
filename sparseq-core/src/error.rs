//! Error types for sparse sequence operations

/// Errors that can occur during sparse sequence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// Index argument is negative or not below the logical length
    InvalidArgument,
}

impl core::fmt::Display for SeqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SeqError::InvalidArgument => "invalid index",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for SeqError {}

/// Result type for sparse sequence operations
pub type Result<T> = core::result::Result<T, SeqError>;
