// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Separator between bytes in [`bytes_to_binary`]
const BYTE_SEPARATOR: &str = "  ";

/// Eight binary digits, MSB first, nibbles split by `_` (`0x80` → `"1000_0000"`).
pub fn byte_to_binary(byte: u8) -> String {
    format!("{:04b}_{:04b}", byte >> 4, byte & 0x0f)
}

/// [`byte_to_binary`] of each byte, joined by two spaces.
pub fn bytes_to_binary(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| byte_to_binary(b))
        .collect::<Vec<_>>()
        .join(BYTE_SEPARATOR)
}
