//! Error types for the cipher core.

use thiserror::Error;

/// Failures reported by block-level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Input to a block operation was not exactly 16 bytes.
    #[error("invalid block size: expected 16 bytes, got {0}")]
    InvalidBlockSize(usize),

    /// Master key was not exactly 32 bytes.
    #[error("invalid key size: expected 32 bytes, got {0}")]
    InvalidKeySize(usize),
}
