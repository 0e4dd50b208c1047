//! Thunder.
//!
//! Distant thunder: a very low rumble that swells and recedes over many
//! seconds.
//!
//! # How It Works
//!
//! 1. Noise through a low-pass at 120 Hz leaves only the rumble
//! 2. A 0.08 Hz sine LFO moves the level between 0 and 1 (base 0.5,
//!    depth 0.5), one roll every ~12.5 seconds

use crate::{
    context::AudioContext,
    graph::{
        extensions::NodeExt,
        filter::FilterNode,
        gain::{GainNode, GainParam},
        lfo::LfoNode,
    },
    sound::SoundNode,
};

/// Create the thunder texture.
pub fn thunder(ctx: &mut AudioContext) -> SoundNode {
    let swell = GainNode::new(0.5).modulate(LfoNode::sine(0.08), GainParam::Level, 0.5);

    let rumble = ctx
        .create_noise_source()
        .through(FilterNode::lowpass(120.0))
        .through(swell);

    SoundNode::new(rumble)
}
