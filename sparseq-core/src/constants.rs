//! Shared constants for sparse sequences

/// Logical length used when a sequence is constructed without one
pub const DEFAULT_LEN: usize = 10;
