//! Frame layout and named-field extraction.

use kuz_core::{Block, BLOCK_SIZE};

use crate::error::StreamError;

/// Width of the big-endian length prefix.
pub const LENGTH_SIZE: usize = 8;

/// Minimum frame size: length prefix plus IV.
pub const HEADER_SIZE: usize = LENGTH_SIZE + BLOCK_SIZE;

/// Borrowed view of a parsed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRef<'a> {
    /// Exact plaintext length recorded by the encryptor.
    pub length: u64,
    /// CBC feedback seed.
    pub iv: Block,
    /// Ciphertext region, a whole number of blocks.
    pub ciphertext: &'a [u8],
}

impl<'a> FrameRef<'a> {
    /// Splits a frame into its named fields, validating every size
    /// before any slicing.
    pub fn parse(frame: &'a [u8]) -> Result<Self, StreamError> {
        if frame.len() < HEADER_SIZE {
            return Err(StreamError::FrameTooShort(frame.len()));
        }

        let mut length_bytes = [0u8; LENGTH_SIZE];
        length_bytes.copy_from_slice(&frame[..LENGTH_SIZE]);
        let length = u64::from_be_bytes(length_bytes);

        let mut iv = [0u8; BLOCK_SIZE];
        iv.copy_from_slice(&frame[LENGTH_SIZE..HEADER_SIZE]);

        let ciphertext = &frame[HEADER_SIZE..];
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(StreamError::TruncatedCiphertext(ciphertext.len()));
        }
        if length > ciphertext.len() as u64 {
            return Err(StreamError::LengthMismatch {
                stored: length,
                available: ciphertext.len(),
            });
        }

        Ok(Self {
            length,
            iv,
            ciphertext,
        })
    }
}

/// Assembles a frame from its fields.
pub(crate) fn build(length: u64, iv: &Block, ciphertext: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    frame.extend_from_slice(&length.to_be_bytes());
    frame.extend_from_slice(iv);
    frame.extend_from_slice(ciphertext);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_frames() {
        assert_eq!(
            FrameRef::parse(&[0u8; 20]),
            Err(StreamError::FrameTooShort(20))
        );
        assert_eq!(FrameRef::parse(&[]), Err(StreamError::FrameTooShort(0)));
    }

    #[test]
    fn rejects_ragged_ciphertext_region() {
        let frame = [0u8; HEADER_SIZE + 17];
        assert_eq!(
            FrameRef::parse(&frame),
            Err(StreamError::TruncatedCiphertext(17))
        );
    }

    #[test]
    fn rejects_length_beyond_payload() {
        let mut frame = vec![0u8; HEADER_SIZE + BLOCK_SIZE];
        frame[..LENGTH_SIZE].copy_from_slice(&17u64.to_be_bytes());
        assert_eq!(
            FrameRef::parse(&frame),
            Err(StreamError::LengthMismatch {
                stored: 17,
                available: 16
            })
        );
    }

    #[test]
    fn build_and_parse_round_trip() {
        let iv: Block = [0xab; 16];
        let ciphertext = [0x5a; 32];
        let frame = build(20, &iv, &ciphertext);
        assert_eq!(frame.len(), HEADER_SIZE + 32);

        let parsed = FrameRef::parse(&frame).expect("frame parses");
        assert_eq!(parsed.length, 20);
        assert_eq!(parsed.iv, iv);
        assert_eq!(parsed.ciphertext, &ciphertext);
    }

    #[test]
    fn header_only_frame_is_valid_and_empty() {
        let frame = build(0, &[0u8; 16], &[]);
        let parsed = FrameRef::parse(&frame).expect("frame parses");
        assert_eq!(parsed.length, 0);
        assert!(parsed.ciphertext.is_empty());
    }
}
