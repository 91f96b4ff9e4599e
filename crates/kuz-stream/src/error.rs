//! Error types for stream operations.

use thiserror::Error;

/// Failures reported by the streaming mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Frame smaller than the 24-byte header (length prefix plus IV).
    #[error("frame too short: {0} bytes, need at least 24")]
    FrameTooShort(usize),

    /// Ciphertext region is not a whole number of 16-byte blocks.
    #[error("truncated ciphertext: {0} bytes is not a multiple of 16")]
    TruncatedCiphertext(usize),

    /// Stored plaintext length exceeds the decrypted byte count.
    #[error("stored length {stored} exceeds {available} ciphertext bytes")]
    LengthMismatch {
        /// Length recorded in the frame header.
        stored: u64,
        /// Bytes actually present in the ciphertext region.
        available: usize,
    },

    /// Plaintext passed to the strict encryptor is not block-aligned.
    #[error("input length {0} is not a multiple of the 16-byte block size")]
    InvalidInputLength(usize),
}
