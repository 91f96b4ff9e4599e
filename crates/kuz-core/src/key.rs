//! Key types.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::CipherError;

/// Master key length in bytes (256 bits).
pub const MASTER_KEY_SIZE: usize = 32;

/// Number of round keys produced by the schedule.
pub const ROUND_KEY_COUNT: usize = 10;

/// 256-bit master key, conceptually a left and a right 16-byte half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterKey(pub [u8; MASTER_KEY_SIZE]);

impl MasterKey {
    /// Left half of the key; becomes round key 0 verbatim.
    #[inline]
    pub fn left(&self) -> Block {
        let mut half = [0u8; BLOCK_SIZE];
        half.copy_from_slice(&self.0[..BLOCK_SIZE]);
        half
    }

    /// Right half of the key; becomes round key 1 verbatim.
    #[inline]
    pub fn right(&self) -> Block {
        let mut half = [0u8; BLOCK_SIZE];
        half.copy_from_slice(&self.0[BLOCK_SIZE..]);
        half
    }
}

impl From<[u8; MASTER_KEY_SIZE]> for MasterKey {
    fn from(value: [u8; MASTER_KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for MasterKey {
    type Error = CipherError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; MASTER_KEY_SIZE] = value
            .try_into()
            .map_err(|_| CipherError::InvalidKeySize(value.len()))?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys, immutable once computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=9).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
