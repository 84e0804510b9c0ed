// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 64-bit logical functions per FIPS 180-4 Section 4.1.3
//!
//! All functions are pure and operate on `u64` with wraparound semantics.

/// ROTR^n(x)
#[inline(always)]
pub const fn rotr(n: u32, x: u64) -> u64 {
    x.rotate_right(n)
}

/// SHR^n(x)
#[inline(always)]
pub const fn shr(n: u32, x: u64) -> u64 {
    x >> n
}

/// Ch(x, y, z) = (x & y) ^ (!x & z)
#[inline(always)]
pub const fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

/// Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
#[inline(always)]
pub const fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0(x) = ROTR^28(x) ^ ROTR^34(x) ^ ROTR^39(x)
#[inline(always)]
pub const fn bsig0(x: u64) -> u64 {
    rotr(28, x) ^ rotr(34, x) ^ rotr(39, x)
}

/// Σ1(x) = ROTR^14(x) ^ ROTR^18(x) ^ ROTR^41(x)
#[inline(always)]
pub const fn bsig1(x: u64) -> u64 {
    rotr(14, x) ^ rotr(18, x) ^ rotr(41, x)
}

/// σ0(x) = ROTR^1(x) ^ ROTR^8(x) ^ SHR^7(x)
#[inline(always)]
pub const fn ssig0(x: u64) -> u64 {
    rotr(1, x) ^ rotr(8, x) ^ shr(7, x)
}

/// σ1(x) = ROTR^19(x) ^ ROTR^61(x) ^ SHR^6(x)
#[inline(always)]
pub const fn ssig1(x: u64) -> u64 {
    rotr(19, x) ^ rotr(61, x) ^ shr(6, x)
}
