//! Fireplace.
//!
//! A fire is two sounds: sharp crackles and a soft, low roar underneath.
//!
//! # How It Works
//!
//! 1. Noise through a narrow band-pass at 3 kHz (Q 2) gives the crackle tone
//! 2. A 6 Hz square LFO gates that layer's gain between 0.2 and 1.0
//!    (base 0.6, depth 0.4), chopping it into pops
//! 3. A second noise source through a low-pass at 300 Hz is the roar,
//!    added at 0.4
//!
//! # Variations
//!
//! - Faster LFO = busier, drier wood
//! - More rumble = bigger, calmer fire

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

/// Create the fireplace texture.
pub fn fireplace(ctx: &mut AudioContext) -> SoundNode {
    let crackle = ctx
        .create_noise_source()
        .through(FilterNode::bandpass(3_000.0).with_q(2.0))
        .through(GainNode::new(0.6).modulate(LfoNode::square(6.0), GainParam::Level, 0.4));

    let rumble = ctx
        .create_noise_source()
        .through(FilterNode::lowpass(300.0))
        .gain(0.4);

    SoundNode::new(crackle.sum(rumble))
}
