//! Round transformations: byte substitution and linear diffusion.

use crate::block::{xor_in_place, Block, BLOCK_SIZE};
use crate::gf::gf_mul;
use crate::sbox::{inv_sbox, sbox};

/// Coefficients of the linear feedback recurrence, one per block position.
const LINEAR_COEFFS: [u8; BLOCK_SIZE] = [
    0x01, 0x94, 0x20, 0x85, 0x10, 0xc2, 0xc0, 0x01, 0xfb, 0x01, 0xc0, 0xc2, 0x10, 0x85, 0x20, 0x94,
];

/// Applies the substitution table to every byte of the state.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse substitution table to every byte of the state.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// One step of the diffusion register: byte 0 falls off, every other
/// byte moves down one position, and the vacated position 15 receives
/// the feedback byte (the XOR over all positions of state[i] times
/// LINEAR_COEFFS[i]).
pub fn diffuse_step(state: &mut Block) {
    let mut feedback = 0u8;
    for (byte, coeff) in state.iter().zip(LINEAR_COEFFS.iter()) {
        feedback ^= gf_mul(*byte, *coeff);
    }
    let mut shifted = [0u8; BLOCK_SIZE];
    shifted[..BLOCK_SIZE - 1].copy_from_slice(&state[1..]);
    shifted[BLOCK_SIZE - 1] = feedback;
    *state = shifted;
}

/// Runs the feedback recurrence backward: byte 15 is the old feedback
/// value, the remaining bytes shift up one position, and position 0 is
/// recovered by cancelling the other terms out of the feedback.
/// Position 0 carries coefficient 1, so no field division is needed.
pub fn inv_diffuse_step(state: &mut Block) {
    let mut shifted = [0u8; BLOCK_SIZE];
    let mut feedback = state[BLOCK_SIZE - 1];
    for i in 1..BLOCK_SIZE {
        shifted[i] = state[i - 1];
        feedback ^= gf_mul(shifted[i], LINEAR_COEFFS[i]);
    }
    shifted[0] = feedback;
    *state = shifted;
}

/// Full linear diffusion transform: 16 feedback steps.
#[inline]
pub fn diffuse(state: &mut Block) {
    for _ in 0..BLOCK_SIZE {
        diffuse_step(state);
    }
}

/// Inverse of [`diffuse`].
#[inline]
pub fn inv_diffuse(state: &mut Block) {
    for _ in 0..BLOCK_SIZE {
        inv_diffuse_step(state);
    }
}

/// Mixes (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
