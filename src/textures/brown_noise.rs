//! Brown noise.
//!
//! A deep, steady rumble, like a waterfall heard through a wall. Strictly,
//! brown noise falls at 6 dB/octave; a soft low-pass over white noise gets
//! close enough for masking and is cheaper to reason about.
//!
//! # How It Works
//!
//! 1. White noise provides the raw material
//! 2. A broad low-pass at 200 Hz (Q 0.5, no resonant bump) keeps only the rumble
//!
//! # Variations
//!
//! - Higher cutoff = "pink-ish", more hiss
//! - Lower cutoff = distant, sub-bass heavy

use crate::{
    context::AudioContext,
    graph::{extensions::NodeExt, filter::FilterNode},
    sound::SoundNode,
};

/// Create the brown-noise texture.
pub fn brown_noise(ctx: &mut AudioContext) -> SoundNode {
    let rumble = ctx
        .create_noise_source()
        .through(FilterNode::lowpass(200.0).with_q(0.5));

    SoundNode::new(rumble)
}
