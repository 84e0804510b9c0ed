// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Presentation helpers around the `ironsha` engine.
//!
//! The engine consumes and produces raw bytes only. This crate holds the
//! stateless conversions used at its boundary:
//!
//! - text to bytes ([`latin1_bytes`])
//! - bytes to lowercase hex and back ([`bytes_to_hex`], [`hex_to_bytes`])
//! - bytes to grouped binary strings ([`bytes_to_binary`])

#![warn(missing_docs)]

mod binary;
mod error;
mod hex;
mod text;

pub use binary::{byte_to_binary, bytes_to_binary};
pub use error::HexError;
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use text::{is_latin1, latin1_bytes};
