//! End-to-end checks through the public API only.

use kuz_core::{expand_key, MasterKey};
use kuz_stream::{decrypt_stream, encrypt_stream_padded, FrameRef, StreamError, HEADER_SIZE};

#[test]
fn file_sized_payload_survives_the_full_pipeline() {
    let key = MasterKey::try_from(&(0u8..32).collect::<Vec<u8>>()[..]).expect("32-byte key");
    let keys = expand_key(&key);

    // 10 KiB minus a ragged tail, the shape a real file usually has.
    let plaintext: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
    let iv = [0x5c; 16];

    let frame = encrypt_stream_padded(&plaintext, &keys, &iv);
    let parsed = FrameRef::parse(&frame).expect("well-formed frame");
    assert_eq!(parsed.length, plaintext.len() as u64);
    assert_eq!(parsed.iv, iv);
    assert_eq!(parsed.ciphertext.len() % 16, 0);

    let recovered = decrypt_stream(&frame, &keys).expect("valid frame");
    assert_eq!(recovered, plaintext);
}

#[test]
fn corrupting_one_ciphertext_block_garbles_only_two_plaintext_blocks() {
    let keys = expand_key(&MasterKey::from([7u8; 32]));
    let plaintext = vec![0xaau8; 64];
    let mut frame = encrypt_stream_padded(&plaintext, &keys, &[0u8; 16]);

    // Flip a bit in ciphertext block 1 (of 4).
    frame[HEADER_SIZE + 16] ^= 0x80;

    let recovered = decrypt_stream(&frame, &keys).expect("frame still well-formed");
    assert_ne!(&recovered[16..48], &plaintext[16..48]);
    assert_eq!(&recovered[..16], &plaintext[..16]);
    assert_eq!(&recovered[48..], &plaintext[48..]);
}

#[test]
fn chopped_frame_reports_truncation_not_panic() {
    let keys = expand_key(&MasterKey::from([7u8; 32]));
    let frame = encrypt_stream_padded(&[1u8; 48], &keys, &[0u8; 16]);

    let chopped = &frame[..frame.len() - 5];
    assert_eq!(
        decrypt_stream(chopped, &keys),
        Err(StreamError::TruncatedCiphertext(43))
    );
}
