// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::HexError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex, two digits per byte, no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Parses a hex string (either case) into bytes.
///
/// # Errors
/// `HexError::OddLength` for an odd digit count, `HexError::InvalidChar` for
/// any non-hex character.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    if hex.len() % 2 != 0 {
        return Err(HexError::OddLength(hex.len()));
    }

    let mut out = Vec::with_capacity(hex.len() / 2);
    let mut high = None;

    for (index, ch) in hex.char_indices() {
        let nibble = ch
            .to_digit(16)
            .ok_or(HexError::InvalidChar { index, ch })? as u8;

        match high.take() {
            None => high = Some(nibble),
            Some(h) => out.push((h << 4) | nibble),
        }
    }

    Ok(out)
}
