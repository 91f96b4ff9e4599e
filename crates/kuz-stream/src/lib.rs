//! Chained (CBC) streaming mode with length-prefixed framing.
//!
//! A stream frame is `[length: 8 bytes BE][IV: 16 bytes][ciphertext:
//! N x 16 bytes]`. The length field records the exact plaintext length
//! the encryptor saw, so decryption can strip any zero padding the
//! caller (or [`encrypt_stream_padded`]) appended to reach a block
//! boundary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc;
mod error;
mod frame;

pub use crate::cbc::{decrypt_stream, encrypt_stream, encrypt_stream_padded};
pub use crate::error::StreamError;
pub use crate::frame::{FrameRef, HEADER_SIZE, LENGTH_SIZE};
