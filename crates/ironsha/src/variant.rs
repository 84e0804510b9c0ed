// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 family variants: initial hash values and output truncation.

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::compress::HashState;
use crate::consts::{H0_384, H0_512, H0_512_224, H0_512_256, SHA512T_IV_MASK};
use crate::driver::hash_blocks;
use crate::error::{DigestError, ParseVariantError};

/// A member of the SHA-512 family.
///
/// All variants share the compression function; they differ only in the
/// initial hash value and in how many leading bytes of the final state are
/// kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// SHA-512/224
    Sha512_224,
    /// SHA-512/256
    Sha512_256,
    /// SHA-384
    Sha384,
    /// SHA-512
    #[default]
    Sha512,
}

impl Variant {
    /// Every variant, shortest digest first.
    pub const ALL: [Variant; 4] = [
        Variant::Sha512_224,
        Variant::Sha512_256,
        Variant::Sha384,
        Variant::Sha512,
    ];

    /// Digest length in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Variant::Sha512_224 => 224,
            Variant::Sha512_256 => 256,
            Variant::Sha384 => 384,
            Variant::Sha512 => 512,
        }
    }

    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Initial hash value H(0). Returned by value; the tables are never mutated.
    pub const fn initial_state(self) -> HashState {
        HashState::from_words(match self {
            Variant::Sha512_224 => H0_512_224,
            Variant::Sha512_256 => H0_512_256,
            Variant::Sha384 => H0_384,
            Variant::Sha512 => H0_512,
        })
    }

    /// Standard name, e.g. `"SHA-512/256"`.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha512_224 => "SHA-512/224",
            Variant::Sha512_256 => "SHA-512/256",
            Variant::Sha384 => "SHA-384",
            Variant::Sha512 => "SHA-512",
        }
    }

    /// Resolves a digest length in bits.
    ///
    /// # Errors
    /// Returns `DigestError::InvalidVariant` unless `bits` is 224, 256, 384 or 512.
    pub const fn from_bits(bits: u32) -> Result<Self, DigestError> {
        match bits {
            224 => Ok(Variant::Sha512_224),
            256 => Ok(Variant::Sha512_256),
            384 => Ok(Variant::Sha384),
            512 => Ok(Variant::Sha512),
            other => Err(DigestError::InvalidVariant(other)),
        }
    }
}

impl TryFrom<u32> for Variant {
    type Error = DigestError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Variant::from_bits(bits)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    /// Accepts a bit length (`"256"`) or a case-insensitive name where dashes
    /// are optional and `_` may stand for `/` (`"SHA-512/256"`, `"sha512_256"`).
    /// `"sha256"` is rejected: SHA-256 is not a member of this family.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| if c == '_' { '/' } else { c.to_ascii_lowercase() })
            .collect();

        let variant = match normalized.as_str() {
            "224" | "512/224" | "sha512/224" => Variant::Sha512_224,
            "256" | "512/256" | "sha512/256" => Variant::Sha512_256,
            "384" | "sha384" => Variant::Sha384,
            "512" | "sha512" => Variant::Sha512,
            _ => return Err(ParseVariantError(s.to_owned())),
        };

        Ok(variant)
    }
}

/// Generates the SHA-512/t initial hash value per FIPS 180-4 Section 5.3.6.
///
/// H(0)'' = SHA-512 H(0) with every word XORed with `0xa5a5a5a5a5a5a5a5`;
/// the result is the SHA-512 state after hashing the ASCII string
/// `"SHA-512/t"` from H(0)''. `sha512t_initial_state(224)` and
/// `sha512t_initial_state(256)` reproduce the SHA-512/224 and SHA-512/256 tables.
///
/// # Errors
/// Returns `DigestError::InvalidTruncation` unless `0 < t < 512` and `t != 384`.
pub fn sha512t_initial_state(t: u32) -> Result<HashState, DigestError> {
    if t == 0 || t >= 512 || t == 384 {
        return Err(DigestError::InvalidTruncation(t));
    }

    let masked = HashState::from_words(H0_512.map(|word| word ^ SHA512T_IV_MASK));
    let label = format!("SHA-512/{t}");

    debug!(t, label = %label, "generating SHA-512/t initial hash value");

    hash_blocks(label.as_bytes(), masked)
}
