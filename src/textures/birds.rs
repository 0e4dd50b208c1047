//! Birds.
//!
//! The only tonal texture: three whistling voices, each chirping and
//! falling silent on its own schedule.
//!
//! # How It Works
//!
//! Each voice is:
//!
//! 1. A sine oscillator at a fixed pitch (2.4, 3.2 or 4 kHz)
//! 2. Frequency-modulated by a 4-10 Hz LFO at 15% of the pitch: the chirp
//! 3. Amplitude-modulated by a 0.3-0.8 Hz LFO (base 0.15, depth 0.15), so
//!    the voice drifts between silence and 0.3
//!
//! LFO rates are drawn from the context's generator, so a seeded context
//! gives the same flock every time. The three voices are summed.

use crate::{
    context::AudioContext,
    graph::{
        extensions::NodeExt,
        gain::{GainNode, GainParam},
        lfo::LfoNode,
        node::GraphNode,
        oscillator::{OscNode, OscParam},
    },
    sound::SoundNode,
};

const PITCHES: [f32; 3] = [2_400.0, 3_200.0, 4_000.0];

/// Create the birds texture.
pub fn birds(ctx: &mut AudioContext) -> SoundNode {
    let [low, mid, high] = PITCHES.map(|pitch| voice(ctx, pitch));
    SoundNode::new(low.sum(mid).sum(high))
}

fn voice(ctx: &mut AudioContext, pitch: f32) -> impl GraphNode {
    let chirp_rate = ctx.random_range(4.0..10.0);
    let presence_rate = ctx.random_range(0.3..0.8);

    OscNode::sine(pitch)
        .modulate(LfoNode::sine(chirp_rate), OscParam::Frequency, pitch * 0.15)
        .through(GainNode::new(0.15).modulate(LfoNode::sine(presence_rate), GainParam::Level, 0.15))
}
