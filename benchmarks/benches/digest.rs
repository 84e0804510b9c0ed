// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use ironsha::{Variant, digest};

fn benchmark_digest(c: &mut Criterion) {
    for variant in Variant::ALL {
        let mut group = c.benchmark_group(variant.name());

        // Short messages are dominated by padding, long ones by compression
        for msg_len in [0usize, 64, 111, 112, 1024, 16 * 1024, 1024 * 1024].iter() {
            group.throughput(Throughput::Bytes(*msg_len as u64));
            group.bench_with_input(format!("{} bytes", msg_len), msg_len, |b, &msg_len| {
                let msg = vec![0xA5u8; msg_len];

                b.iter(|| {
                    digest(black_box(&msg), black_box(variant)).expect("digest failed");
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benchmark_digest);
criterion_main!(benches);
