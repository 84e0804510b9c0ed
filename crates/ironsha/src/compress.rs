// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 compression function per FIPS 180-4 Section 6.4.2 steps 2-4

use crate::consts::{K, SCHEDULE_LEN, STATE_LEN, STATE_WORDS};
use crate::schedule::MessageSchedule;
use crate::word::{bsig0, bsig1, ch, maj};

/// Hash state H(i): eight 64-bit registers.
///
/// A plain value type. Every digest computation owns its own copy, so
/// independent computations never share mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState([u64; STATE_WORDS]);

impl HashState {
    /// Wraps eight registers.
    pub const fn from_words(words: [u64; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// The registers H0..H7.
    #[inline(always)]
    pub fn words(&self) -> &[u64; STATE_WORDS] {
        &self.0
    }

    /// Big-endian concatenation H0 || H1 || .. || H7 (64 bytes).
    pub fn to_be_bytes(&self) -> [u8; STATE_LEN] {
        let mut out = [0u8; STATE_LEN];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Returns the state after processing one block's schedule.
    ///
    /// Runs the 80 rounds over working variables a..h initialized from `self`,
    /// then feeds the pre-round state forward: H(i)j = H(i-1)j + wv[j].
    #[must_use]
    pub fn compress(&self, schedule: &MessageSchedule) -> Self {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;
        let w = schedule.words();

        for t in 0..SCHEDULE_LEN {
            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[t])
                .wrapping_add(w[t]);
            let t2 = bsig0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        let wv = [a, b, c, d, e, f, g, h];
        let mut next = self.0;
        for (hj, vj) in next.iter_mut().zip(wv) {
            *hj = hj.wrapping_add(vj);
        }

        Self(next)
    }
}

