// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::codec::{bytes_to_words, words_to_bytes};
use crate::error::DigestError;

#[test]
fn u64_words_are_big_endian() {
    let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0, 0, 0, 0, 0, 0, 0, 0x18];
    let words: Vec<u64> = bytes_to_words(&bytes).expect("bytes_to_words failed");

    assert_eq!(words, vec![0x0123_4567_89ab_cdef, 0x18]);
    assert_eq!(words_to_bytes(&words), bytes);
}

#[test]
fn u32_words_are_big_endian() {
    let bytes = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x01];
    let words: Vec<u32> = bytes_to_words(&bytes).expect("bytes_to_words failed");

    assert_eq!(words, vec![0xdead_beef, 1]);
    assert_eq!(words_to_bytes(&words), bytes);
}

#[test]
fn empty_input_is_empty_output() {
    let words: Vec<u64> = bytes_to_words(&[]).expect("bytes_to_words failed");

    assert!(words.is_empty());
    assert!(words_to_bytes::<u64>(&[]).is_empty());
}

#[test]
fn misaligned_bytes_are_rejected() {
    assert_eq!(
        bytes_to_words::<u64>(&[0u8; 12]),
        Err(DigestError::WordAlignment { len: 12, width: 8 })
    );
    assert_eq!(
        bytes_to_words::<u32>(&[0u8; 6]),
        Err(DigestError::WordAlignment { len: 6, width: 4 })
    );
}
