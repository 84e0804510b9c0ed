// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule W[0..79] per FIPS 180-4 Section 6.4.2 step 1

use core::ops::Index;

use crate::block::Block;
use crate::consts::{BLOCK_WORDS, SCHEDULE_LEN};
use crate::word::{ssig0, ssig1};

/// The 80-word expansion of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule {
    w: [u64; SCHEDULE_LEN],
}

impl MessageSchedule {
    /// Expands `block` into its schedule.
    ///
    /// W[0..15] are the block words; for t in 16..80:
    /// W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16] (mod 2^64)
    pub fn new(block: &Block) -> Self {
        let mut w = [0u64; SCHEDULE_LEN];
        w[..BLOCK_WORDS].copy_from_slice(block.words());

        for t in BLOCK_WORDS..SCHEDULE_LEN {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        Self { w }
    }

    /// All 80 schedule words.
    #[inline(always)]
    pub fn words(&self) -> &[u64; SCHEDULE_LEN] {
        &self.w
    }
}

impl Index<usize> for MessageSchedule {
    type Output = u64;

    fn index(&self, t: usize) -> &u64 {
        &self.w[t]
    }
}
