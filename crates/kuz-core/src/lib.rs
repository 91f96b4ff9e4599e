//! Kuznechik-family 128-bit block cipher used by the `kuzfile` tool.
//!
//! This crate implements the cipher from the field arithmetic up:
//! - GF(2^8) multiplication under the x^8 + x^7 + x^6 + x + 1 polynomial.
//! - The byte substitution and 16-step linear diffusion transforms.
//! - The 32-step Feistel key schedule expanding a 256-bit master key
//!   into 10 round keys.
//! - Single-block encryption and decryption (9 rounds plus a final
//!   whitening XOR).
//!
//! The key schedule consumes its round constants in raw form (byte 0 of
//! constant i is i+1, the rest zero) rather than pre-diffusing them the
//! way RFC 7801 does. Existing ciphertexts depend on this, so it must
//! not be "corrected".
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_blocks, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt, decrypt_block, encrypt, encrypt_block, expand_key};
pub use crate::error::CipherError;
pub use crate::key::{MasterKey, RoundKeys, MASTER_KEY_SIZE, ROUND_KEY_COUNT};
