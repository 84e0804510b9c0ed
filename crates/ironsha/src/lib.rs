// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 family digests
//!
//! One-shot SHA-512, SHA-384, SHA-512/224 and SHA-512/256 over in-memory
//! byte slices, per FIPS 180-4. All four variants share one compression
//! function and differ only in their initial hash value and output truncation.
//!
//! Pipeline (each stage is a pure function and is public for testing):
//!
//! ```text
//! input ─▶ padding::pad ─▶ block::segment ─▶ MessageSchedule::new ─▶ HashState::compress ─▶ Digest
//!                                         └──────────── per block, in order ────────────┘
//! ```
//!
//! ```
//! use ironsha::{digest, Variant};
//!
//! let d = digest(b"abc", Variant::Sha512_256).unwrap();
//! assert_eq!(d.as_bytes().len(), 32);
//! assert_eq!(d.as_bytes()[..4], [0x53, 0x04, 0x8e, 0x26]);
//! ```
//!
//! The constant tables are compiled in and never mutated; every call owns its
//! hash state, so independent digests may run concurrently without locking.
//!
//! Not provided: incremental (streaming) hashing, hardware acceleration,
//! constant-time guarantees.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod driver;
mod error;

pub mod block;
pub mod codec;
pub mod compress;
pub mod padding;
pub mod schedule;
pub mod variant;
pub mod word;

pub use block::Block;
pub use compress::HashState;
pub use consts::{BLOCK_LEN, BLOCK_WORDS, LENGTH_FIELD_LEN, SCHEDULE_LEN, STATE_LEN, STATE_WORDS};
pub use driver::{Digest, digest, digest_bits};
pub use error::{DigestError, ParseVariantError};
pub use schedule::MessageSchedule;
pub use variant::{Variant, sha512t_initial_state};
