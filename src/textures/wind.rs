//! Wind.
//!
//! Wind is noise whose "pitch" drifts: gusts are the band of audible noise
//! sliding up and down.
//!
//! # How It Works
//!
//! 1. Noise through a broad band-pass centered at 600 Hz (Q 0.5)
//! 2. A 0.15 Hz sine LFO sweeps the center ±400 Hz, so one gust cycle
//!    takes about 6.7 seconds and spans 200 Hz ↔ 1000 Hz

use crate::{
    context::AudioContext,
    graph::{
        extensions::NodeExt,
        filter::{FilterNode, FilterParam},
        lfo::LfoNode,
    },
    sound::SoundNode,
};

/// Create the wind texture.
pub fn wind(ctx: &mut AudioContext) -> SoundNode {
    let gusts = FilterNode::bandpass(600.0)
        .with_q(0.5)
        .modulate(LfoNode::sine(0.15), FilterParam::Cutoff, 400.0);

    SoundNode::new(ctx.create_noise_source().through(gusts))
}
