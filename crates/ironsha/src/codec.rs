// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian conversion between byte sequences and fixed-width words.

use crate::error::DigestError;

/// A fixed-width word with a big-endian byte representation.
pub trait BeWord: Copy {
    /// Width in bytes
    const WIDTH: usize;

    /// Decodes a word from exactly `WIDTH` bytes.
    ///
    /// Callers guarantee `bytes.len() == WIDTH`.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Appends the big-endian encoding of `self` to `out`.
    fn extend_be(self, out: &mut Vec<u8>);
}

impl BeWord for u32 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn from_be_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        u32::from_be_bytes(buf)
    }

    #[inline(always)]
    fn extend_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }
}

impl BeWord for u64 {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn from_be_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        u64::from_be_bytes(buf)
    }

    #[inline(always)]
    fn extend_be(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }
}

/// Decodes `bytes` into big-endian words.
///
/// # Errors
/// Returns `DigestError::WordAlignment` if `bytes.len()` is not a multiple of
/// the word width.
pub fn bytes_to_words<W: BeWord>(bytes: &[u8]) -> Result<Vec<W>, DigestError> {
    if bytes.len() % W::WIDTH != 0 {
        return Err(DigestError::WordAlignment {
            len: bytes.len(),
            width: W::WIDTH,
        });
    }

    Ok(bytes.chunks_exact(W::WIDTH).map(W::from_be_slice).collect())
}

/// Encodes `words` as the concatenation of their big-endian bytes.
pub fn words_to_bytes<W: BeWord>(words: &[W]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * W::WIDTH);
    for &word in words {
        word.extend_be(&mut out);
    }
    out
}

/// Decodes big-endian `u64` words from `bytes` into `words` without allocating.
pub(crate) fn fill_words_be(words: &mut [u64], bytes: &[u8]) {
    for (slot, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        *slot = u64::from_be_slice(chunk);
    }
}
