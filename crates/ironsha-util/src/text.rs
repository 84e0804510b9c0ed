// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// One byte per character: the low 8 bits of its code point.
///
/// Exact for Latin-1 text (U+0000..=U+00FF). Anything above is truncated and
/// therefore lossy; check with [`is_latin1`] first when that matters. This is
/// not UTF-8 encoding: `"é"` becomes `[0xe9]`, not `[0xc3, 0xa9]`.
pub fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars().map(|c| (u32::from(c) & 0xff) as u8).collect()
}

/// True if every character survives [`latin1_bytes`] unchanged.
pub fn is_latin1(text: &str) -> bool {
    text.chars().all(|c| u32::from(c) <= 0xff)
}
