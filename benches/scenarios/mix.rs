//! Benchmarks for the engine mixing several channels.
//!
//! Includes registry walk, per-channel gain smoothing and timer polling,
//! i.e. everything the audio callback pays for.

use std::hint::black_box;

use ambiance::{ChannelId, Engine, EngineConfig};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

fn engine_with(channels: &[ChannelId]) -> Engine {
    let mut engine = Engine::new(EngineConfig {
        seed: Some(7),
        ..EngineConfig::default()
    });
    for id in channels {
        engine.start_sound(id.as_str(), 0.5);
    }
    engine
}

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mix");

    let scenes: [(&str, &[ChannelId]); 3] = [
        ("2_channel_rainy", &[ChannelId::Rain, ChannelId::Thunder]),
        (
            "3_channel_cabin",
            &[ChannelId::Fireplace, ChannelId::Wind, ChannelId::BrownNoise],
        ),
        ("6_channel_all", &ChannelId::ALL),
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, channels) in scenes {
            let mut engine = engine_with(channels);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    engine.render(black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}
