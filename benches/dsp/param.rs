//! Benchmarks for smoothed gain application.

use std::hint::black_box;

use ambiance::dsp::param::AudioParam;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_param(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/param");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.5f32; size];

        // Settled - the common case between user actions
        let mut param = AudioParam::new(0.7);
        group.bench_with_input(BenchmarkId::new("settled", size), &size, |b, _| {
            b.iter(|| {
                param.apply(black_box(&mut buffer), 48_000.0);
            })
        });

        // Gliding - retarget every block so it never settles
        let mut param = AudioParam::new(0.0);
        let mut up = true;
        group.bench_with_input(BenchmarkId::new("gliding", size), &size, |b, _| {
            b.iter(|| {
                param.set_target(if up { 1.0 } else { 0.0 }, 0.1);
                up = !up;
                param.apply(black_box(&mut buffer), 48_000.0);
            })
        });
    }

    group.finish();
}
