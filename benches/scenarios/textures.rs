//! Benchmarks for each texture recipe, rendered at full gain.

use std::hint::black_box;

use ambiance::{AudioContext, ChannelId};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_textures(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/textures");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for id in ChannelId::ALL {
            let mut ctx = AudioContext::new(48_000.0, 2.0, Some(7));
            ctx.resume();
            let render_ctx = ctx.render_ctx();

            let mut node = id.build(&mut ctx);
            node.gain.set_value(1.0);
            node.start();

            group.bench_with_input(BenchmarkId::new(id.as_str(), size), &size, |b, _| {
                b.iter(|| {
                    node.render(black_box(&mut buffer), black_box(&render_ctx));
                })
            });
        }
    }

    group.finish();
}
