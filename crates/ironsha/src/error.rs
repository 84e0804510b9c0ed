// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest engine error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// A block was built from a slice that is not exactly 128 bytes
    #[error("block must be exactly 128 bytes, got {0}")]
    BlockBytes(usize),

    /// A block was built from a slice that is not exactly 16 words
    #[error("block must be exactly 16 words, got {0}")]
    BlockWords(usize),

    /// Padded message length is not a multiple of the block size
    #[error("padded message length {0} is not a multiple of 128 bytes")]
    PaddedLength(usize),

    /// Byte buffer length is not a multiple of the word width
    #[error("byte length {len} is not a multiple of the {width}-byte word width")]
    WordAlignment {
        /// Offending byte length
        len: usize,
        /// Word width in bytes
        width: usize,
    },

    /// Requested digest length is not one of 224, 256, 384 or 512 bits
    #[error("unsupported digest length {0} bits (expected 224, 256, 384 or 512)")]
    InvalidVariant(u32),

    /// Message bit length does not fit the 128-bit length field
    #[error("message of {0} bytes exceeds the 128-bit length field")]
    UnsupportedLength(usize),

    /// SHA-512/t requested with t outside 1..512 or t == 384
    #[error("invalid SHA-512/t truncation t={0}")]
    InvalidTruncation(u32),
}

/// Error returned when parsing a [`Variant`](crate::Variant) name fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown SHA-512 variant {0:?}")]
pub struct ParseVariantError(pub String);
