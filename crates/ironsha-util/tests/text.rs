// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod latin1_tests {
    use ironsha_util::{is_latin1, latin1_bytes};

    #[test]
    fn test_ascii_is_identity() {
        assert_eq!(latin1_bytes("abc"), b"abc".to_vec());
        assert!(is_latin1("abc"));
    }

    #[test]
    fn test_latin1_is_single_byte() {
        // U+00E9 LATIN SMALL LETTER E WITH ACUTE
        assert_eq!(latin1_bytes("\u{e9}"), vec![0xe9]);
        assert!(is_latin1("caf\u{e9}"));
    }

    #[test]
    fn test_wide_chars_truncate_to_low_byte() {
        // U+20AC EURO SIGN -> 0xAC, U+1F600 -> 0x00
        assert_eq!(latin1_bytes("\u{20ac}\u{1f600}"), vec![0xac, 0x00]);
        assert!(!is_latin1("\u{20ac}"));
    }

    #[test]
    fn test_one_byte_per_char() {
        let text = "h\u{e9}llo \u{4e16}\u{754c}";
        assert_eq!(latin1_bytes(text).len(), text.chars().count());
    }

    #[test]
    fn test_empty() {
        assert!(latin1_bytes("").is_empty());
        assert!(is_latin1(""));
    }
}
