// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot digest computation: pad, segment, schedule, compress, truncate.

use tracing::{instrument, trace};

use crate::block::segment;
use crate::compress::HashState;
use crate::consts::STATE_LEN;
use crate::error::DigestError;
use crate::padding::pad;
use crate::schedule::MessageSchedule;
use crate::variant::Variant;

/// A finished digest: the leading `variant.output_len()` bytes of the final
/// hash state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    variant: Variant,
    // Bytes past output_len() are always zero.
    bytes: [u8; STATE_LEN],
}

impl Digest {
    fn truncate(state: &HashState, variant: Variant) -> Self {
        let len = variant.output_len();
        let mut bytes = [0u8; STATE_LEN];
        bytes[..len].copy_from_slice(&state.to_be_bytes()[..len]);
        Self { variant, bytes }
    }

    /// The variant that produced this digest.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Digest bytes; always `variant().output_len()` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.variant.output_len()]
    }

    /// Copies the digest bytes into a `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Digest {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

/// Computes the `variant` digest of `input`.
///
/// # Errors
/// Returns `DigestError::UnsupportedLength` if the input is too long for the
/// 128-bit length field. No other error is reachable for a valid `Variant`.
#[instrument(level = "debug", skip_all, fields(variant = %variant, len = input.len()))]
pub fn digest(input: &[u8], variant: Variant) -> Result<Digest, DigestError> {
    let state = hash_blocks(input, variant.initial_state())?;
    Ok(Digest::truncate(&state, variant))
}

/// Computes the digest selected by its bit length (224, 256, 384 or 512).
///
/// # Errors
/// Returns `DigestError::InvalidVariant` for any other bit length, before any
/// hashing work is done.
pub fn digest_bits(input: &[u8], bits: u32) -> Result<Digest, DigestError> {
    digest(input, Variant::from_bits(bits)?)
}

/// Runs the full pipeline from `initial` and returns the untruncated final state.
///
/// Blocks are chained strictly in order: each block's output state is the
/// next block's input.
pub(crate) fn hash_blocks(input: &[u8], initial: HashState) -> Result<HashState, DigestError> {
    let padded = pad(input)?;
    let blocks = segment(&padded)?;

    trace!(blocks = blocks.len(), padded_len = padded.len(), "message padded");

    let state = blocks.fold(initial, |state, block| {
        let schedule = MessageSchedule::new(&block);
        state.compress(&schedule)
    });

    Ok(state)
}
