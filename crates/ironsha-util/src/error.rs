// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hex decoding error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Input has an odd number of digits
    #[error("hex string has odd length {0}")]
    OddLength(usize),

    /// Input contains a character outside `[0-9a-fA-F]`
    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidChar {
        /// Byte offset of the offending character
        index: usize,
        /// The offending character
        ch: char,
    },
}
