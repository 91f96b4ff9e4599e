//! CBC chaining over whole blocks.

use kuz_core::{decrypt_block, encrypt_block, xor_blocks, Block, RoundKeys, BLOCK_SIZE};

use crate::error::StreamError;
use crate::frame::{self, FrameRef};

/// Encrypts block-aligned plaintext into a framed stream.
///
/// The plaintext length must be a multiple of 16; callers with
/// arbitrary-length data should use [`encrypt_stream_padded`].
pub fn encrypt_stream(
    plaintext: &[u8],
    round_keys: &RoundKeys,
    iv: &Block,
) -> Result<Vec<u8>, StreamError> {
    if plaintext.len() % BLOCK_SIZE != 0 {
        return Err(StreamError::InvalidInputLength(plaintext.len()));
    }
    Ok(chain(plaintext, plaintext.len() as u64, round_keys, iv))
}

/// Encrypts plaintext of any length, zero-filling the tail of the
/// final partial block. The frame still records the exact input
/// length, so [`decrypt_stream`] strips the fill bytes again.
pub fn encrypt_stream_padded(plaintext: &[u8], round_keys: &RoundKeys, iv: &Block) -> Vec<u8> {
    let remainder = plaintext.len() % BLOCK_SIZE;
    if remainder == 0 {
        return chain(plaintext, plaintext.len() as u64, round_keys, iv);
    }
    let mut padded = plaintext.to_vec();
    padded.resize(plaintext.len() + BLOCK_SIZE - remainder, 0);
    chain(&padded, plaintext.len() as u64, round_keys, iv)
}

fn chain(padded: &[u8], original_len: u64, round_keys: &RoundKeys, iv: &Block) -> Vec<u8> {
    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut feedback = *iv;

    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        feedback = encrypt_block(&xor_blocks(&block, &feedback), round_keys);
        ciphertext.extend_from_slice(&feedback);
    }

    frame::build(original_len, iv, &ciphertext)
}

/// Reverses the framing and chaining, truncating the output to the
/// stored plaintext length.
pub fn decrypt_stream(frame_bytes: &[u8], round_keys: &RoundKeys) -> Result<Vec<u8>, StreamError> {
    let frame = FrameRef::parse(frame_bytes)?;

    let mut plaintext = Vec::with_capacity(frame.ciphertext.len());
    let mut feedback = frame.iv;

    for chunk in frame.ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        let decrypted = decrypt_block(&block, round_keys);
        plaintext.extend_from_slice(&xor_blocks(&decrypted, &feedback));
        feedback = block;
    }

    plaintext.truncate(frame.length as usize);
    Ok(plaintext)
}
