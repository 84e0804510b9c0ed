// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use sha2::Digest as _;

use crate::codec::{bytes_to_words, words_to_bytes};
use crate::digest;
use crate::padding::{block_count, pad};
use crate::variant::Variant;

fn any_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

/// Reference digest from the RustCrypto `sha2` crate.
fn reference(input: &[u8], variant: Variant) -> Vec<u8> {
    match variant {
        Variant::Sha512 => sha2::Sha512::digest(input).to_vec(),
        Variant::Sha384 => sha2::Sha384::digest(input).to_vec(),
        Variant::Sha512_256 => sha2::Sha512_256::digest(input).to_vec(),
        Variant::Sha512_224 => sha2::Sha512_224::digest(input).to_vec(),
    }
}

fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

proptest! {
    #[test]
    fn matches_reference_implementation(
        input in prop::collection::vec(any::<u8>(), 0..600),
        variant in any_variant()
    ) {
        let got = digest(&input, variant).expect("digest failed");
        prop_assert_eq!(got.to_vec(), reference(&input, variant));
    }

    #[test]
    fn output_len_matches_variant(
        input in prop::collection::vec(any::<u8>(), 0..400),
        variant in any_variant()
    ) {
        let got = digest(&input, variant).expect("digest failed");
        prop_assert_eq!(got.as_bytes().len(), variant.bits() as usize / 8);
        prop_assert_eq!(got.variant(), variant);
    }

    #[test]
    fn digest_is_deterministic(
        input in prop::collection::vec(any::<u8>(), 0..400),
        variant in any_variant()
    ) {
        let first = digest(&input, variant).expect("digest failed");
        let second = digest(&input, variant).expect("digest failed");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_bit_flip_avalanches(
        input in prop::collection::vec(any::<u8>(), 1..300),
        bit in any::<prop::sample::Index>(),
        variant in any_variant()
    ) {
        let bit = bit.index(input.len() * 8);
        let mut flipped = input.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        let a = digest(&input, variant).expect("digest failed");
        let b = digest(&flipped, variant).expect("digest failed");

        // Expect about half of the output bits to change
        let total = variant.bits();
        let changed = bit_distance(a.as_bytes(), b.as_bytes());
        prop_assert!(
            changed > total * 3 / 10 && changed < total * 7 / 10,
            "{} of {} bits changed", changed, total
        );
    }

    #[test]
    fn padded_length_is_block_multiple(len in 0usize..2048) {
        let padded = pad(&vec![0xA5u8; len]).expect("pad failed");

        prop_assert_eq!(padded.len() % 128, 0);
        prop_assert_eq!(padded.len() / 128, block_count(len).expect("block_count failed"));
        prop_assert_eq!(padded[len], 0x80);
    }

    #[test]
    fn u64_words_round_trip(words in prop::collection::vec(any::<u64>(), 0..64)) {
        let bytes = words_to_bytes(&words);
        prop_assert_eq!(bytes.len(), words.len() * 8);
        prop_assert_eq!(bytes_to_words::<u64>(&bytes).expect("bytes_to_words failed"), words);
    }

    #[test]
    fn u64_bytes_round_trip(words in 0usize..64, seed in any::<u8>()) {
        let bytes: Vec<u8> = (0..words * 8).map(|i| (i as u8).wrapping_mul(31) ^ seed).collect();
        let decoded = bytes_to_words::<u64>(&bytes).expect("bytes_to_words failed");
        prop_assert_eq!(words_to_bytes(&decoded), bytes);
    }

    #[test]
    fn u32_words_round_trip(words in prop::collection::vec(any::<u32>(), 0..64)) {
        let bytes = words_to_bytes(&words);
        prop_assert_eq!(bytes_to_words::<u32>(&bytes).expect("bytes_to_words failed"), words);
    }
}
