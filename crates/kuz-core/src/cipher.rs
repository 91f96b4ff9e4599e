//! Key schedule and block encryption/decryption.

use crate::block::{xor_blocks, Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::key::{MasterKey, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{add_round_key, diffuse, inv_diffuse, inv_sub_bytes, sub_bytes};

/// Number of Feistel steps driving the key schedule.
const FEISTEL_STEPS: usize = 32;

/// Round constants consumed by the Feistel steps, in raw form: block i
/// is all zero except byte 0 = i + 1. They are deliberately NOT run
/// through the diffusion transform; existing ciphertexts depend on it.
fn iteration_constants() -> [Block; FEISTEL_STEPS] {
    let mut constants = [[0u8; BLOCK_SIZE]; FEISTEL_STEPS];
    for (i, constant) in constants.iter_mut().enumerate() {
        constant[0] = (i + 1) as u8;
    }
    constants
}

/// One Feistel step: the left half is transformed and mixed into the
/// right, the old left carries forward unchanged.
fn feistel_step(left: &Block, right: &Block, constant: &Block) -> (Block, Block) {
    let mut mixed = xor_blocks(left, constant);
    sub_bytes(&mut mixed);
    diffuse(&mut mixed);
    (xor_blocks(&mixed, right), *left)
}

/// Expands a 256-bit master key into 10 round keys.
///
/// Keys 0 and 1 are the master-key halves verbatim; each group of
/// eight Feistel steps over the running (left, right) pair yields the
/// next two keys.
pub fn expand_key(key: &MasterKey) -> RoundKeys {
    let constants = iteration_constants();
    let mut keys = [[0u8; BLOCK_SIZE]; ROUND_KEY_COUNT];
    keys[0] = key.left();
    keys[1] = key.right();

    let mut pair = (keys[0], keys[1]);
    for group in 0..4 {
        for step in 0..8 {
            pair = feistel_step(&pair.0, &pair.1, &constants[group * 8 + step]);
        }
        keys[2 * group + 2] = pair.0;
        keys[2 * group + 3] = pair.1;
    }

    RoundKeys(keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    for round in 0..9 {
        add_round_key(&mut state, round_keys.get(round));
        sub_bytes(&mut state);
        diffuse(&mut state);
    }
    add_round_key(&mut state, round_keys.get(9));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(9));
    for round in (0..9).rev() {
        inv_diffuse(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    state
}

/// Encrypts a block given as a byte slice, validating its length.
pub fn encrypt(block: &[u8], round_keys: &RoundKeys) -> Result<Block, CipherError> {
    let block: &Block = block
        .try_into()
        .map_err(|_| CipherError::InvalidBlockSize(block.len()))?;
    Ok(encrypt_block(block, round_keys))
}

/// Decrypts a block given as a byte slice, validating its length.
pub fn decrypt(block: &[u8], round_keys: &RoundKeys) -> Result<Block, CipherError> {
    let block: &Block = block
        .try_into()
        .map_err(|_| CipherError::InvalidBlockSize(block.len()))?;
    Ok(decrypt_block(block, round_keys))
}
