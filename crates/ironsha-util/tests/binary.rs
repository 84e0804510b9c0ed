// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod binary_tests {
    use ironsha_util::{byte_to_binary, bytes_to_binary};

    #[test]
    fn test_padding_marker() {
        assert_eq!(byte_to_binary(0x80), "1000_0000");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(byte_to_binary(0x00), "0000_0000");
        assert_eq!(byte_to_binary(0xff), "1111_1111");
        assert_eq!(byte_to_binary(0x0f), "0000_1111");
    }

    #[test]
    fn test_bytes_joined_by_two_spaces() {
        assert_eq!(
            bytes_to_binary(&[0x61, 0x62, 0x63]),
            "0110_0001  0110_0010  0110_0011"
        );
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(bytes_to_binary(&[0xa5]), "1010_0101");
        assert_eq!(bytes_to_binary(&[]), "");
    }
}
