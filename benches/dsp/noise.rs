//! Benchmarks for noise generation and playback.
//!
//! Buffer generation happens once per source on the control thread;
//! playback runs every block.

use std::hint::black_box;

use ambiance::dsp::noise::NoiseBuffer;
use ambiance::graph::{buffer_source::BufferSourceNode, node::GraphNode, node::RenderCtx};
use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    // One default-length buffer (2 s at 48 kHz)
    let mut rng = Pcg32::seed_from_u64(1);
    group.bench_function("generate_2s", |b| {
        b.iter(|| NoiseBuffer::white(48_000.0, black_box(2.0), &mut rng))
    });

    let ctx = RenderCtx::new(48_000.0);
    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut source = BufferSourceNode::new(NoiseBuffer::white(48_000.0, 2.0, &mut rng));
        let _ = source.start();

        group.bench_with_input(BenchmarkId::new("playback", size), &size, |b, _| {
            b.iter(|| {
                source.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
