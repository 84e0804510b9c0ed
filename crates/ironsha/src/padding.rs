// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1.2
//!
//! M || 0x80 || 0x00.. || len(M) as u128 big-endian, total length a multiple
//! of 1024 bits. Identical for every SHA-512 family variant.

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::DigestError;

/// Padding marker: a single 1 bit followed by seven 0 bits
const PAD_MARKER: u8 = 0x80;

/// Bit length of a `len`-byte message as written into the length field.
///
/// # Errors
/// Returns `DigestError::UnsupportedLength` if `8 * len` does not fit in 128 bits.
pub fn message_bit_len(len: usize) -> Result<u128, DigestError> {
    u128::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(DigestError::UnsupportedLength(len))
}

/// Length in bytes of a `len`-byte message after padding.
///
/// The least multiple of 128 that is >= `len + 1 + 16`.
pub fn padded_len(len: usize) -> Result<usize, DigestError> {
    len.checked_add(1 + LENGTH_FIELD_LEN)
        .and_then(|min| min.checked_next_multiple_of(BLOCK_LEN))
        .ok_or(DigestError::UnsupportedLength(len))
}

/// Number of 1024-bit blocks a `len`-byte message pads into.
pub fn block_count(len: usize) -> Result<usize, DigestError> {
    Ok(padded_len(len)? / BLOCK_LEN)
}

/// Pads `message` so its length is a multiple of 128 bytes.
///
/// # Errors
/// Returns `DigestError::UnsupportedLength` if the message length cannot be
/// encoded in the 128-bit length field.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, DigestError> {
    let bit_len = message_bit_len(message.len())?;
    let total = padded_len(message.len())?;

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(PAD_MARKER);

    // Zero fill up to the length field
    padded.resize(total - LENGTH_FIELD_LEN, 0);

    // 128-bit big-endian bit length
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    Ok(padded)
}
