//! Master-key loading from ASCII bit-text files.
//!
//! A key file holds a sequence of '0'/'1' characters; 256 of them,
//! starting at a caller-chosen character offset, form the master key.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use kuz_core::{MasterKey, MASTER_KEY_SIZE};

/// Number of bit characters a key consumes.
const KEY_BITS: usize = MASTER_KEY_SIZE * 8;

/// Reads a 256-bit master key from `path`, starting `offset`
/// characters into the file.
pub fn read_master_key(path: &Path, offset: usize) -> Result<MasterKey> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read key file {}", path.display()))?;
    parse_bit_text(&text, offset).with_context(|| format!("parse key file {}", path.display()))
}

fn parse_bit_text(text: &str, offset: usize) -> Result<MasterKey> {
    let bytes = text.as_bytes();
    if bytes.len().saturating_sub(offset) < KEY_BITS {
        bail!(
            "need {KEY_BITS} key bits at offset {offset}, file has {} characters",
            bytes.len()
        );
    }
    let window = &bytes[offset..offset + KEY_BITS];

    let mut key = [0u8; MASTER_KEY_SIZE];
    for (i, chunk) in window.chunks_exact(8).enumerate() {
        let mut value = 0u8;
        for (j, bit) in chunk.iter().enumerate() {
            match bit {
                b'0' => {}
                b'1' => value |= 1 << (7 - j),
                other => bail!(
                    "invalid key character {:?} at offset {}",
                    char::from(*other),
                    offset + i * 8 + j
                ),
            }
        }
        key[i] = value;
    }
    Ok(MasterKey::from(key))
}
