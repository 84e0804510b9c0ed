// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 1024-bit message blocks and the segmenter that cuts a padded message into them.

use core::iter::FusedIterator;
use core::slice::ChunksExact;

use crate::codec::fill_words_be;
use crate::consts::{BLOCK_LEN, BLOCK_WORDS};
use crate::error::DigestError;

/// One 1024-bit block viewed as 16 big-endian words M(i)0..M(i)15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    words: [u64; BLOCK_WORDS],
}

impl Block {
    /// Decodes a block from exactly 128 bytes.
    ///
    /// # Errors
    /// Returns `DigestError::BlockBytes` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DigestError> {
        if bytes.len() != BLOCK_LEN {
            return Err(DigestError::BlockBytes(bytes.len()));
        }

        let mut words = [0u64; BLOCK_WORDS];
        fill_words_be(&mut words, bytes);

        Ok(Self { words })
    }

    /// Builds a block from exactly 16 words.
    ///
    /// # Errors
    /// Returns `DigestError::BlockWords` for any other length.
    pub fn from_words(words: &[u64]) -> Result<Self, DigestError> {
        let words: [u64; BLOCK_WORDS] = words
            .try_into()
            .map_err(|_| DigestError::BlockWords(words.len()))?;

        Ok(Self { words })
    }

    /// The 16 words of this block.
    #[inline(always)]
    pub fn words(&self) -> &[u64; BLOCK_WORDS] {
        &self.words
    }
}

/// Splits a padded message into its blocks, in order.
///
/// # Errors
/// Returns `DigestError::PaddedLength` if `padded.len()` is not a multiple of 128.
pub fn segment(padded: &[u8]) -> Result<Blocks<'_>, DigestError> {
    if padded.len() % BLOCK_LEN != 0 {
        return Err(DigestError::PaddedLength(padded.len()));
    }

    Ok(Blocks {
        chunks: padded.chunks_exact(BLOCK_LEN),
    })
}

/// Iterator over the blocks of a padded message.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        // Every chunk is exactly BLOCK_LEN bytes.
        self.chunks.next().map(|chunk| {
            let mut words = [0u64; BLOCK_WORDS];
            fill_words_be(&mut words, chunk);
            Block { words }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
