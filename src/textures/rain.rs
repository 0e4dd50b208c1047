//! Rain.
//!
//! Steady rain is mostly high-frequency hiss with a brighter shimmer of
//! individual droplets on top.
//!
//! # How It Works
//!
//! 1. One noise source through a high-pass at 4 kHz: the hiss (weight 0.7)
//! 2. A second, independent noise source through a band-pass at 8 kHz:
//!    the droplet shimmer (weight 0.3)
//! 3. Both mixed into the master gain
//!
//! Two sources rather than one split in two keeps the layers uncorrelated,
//! which is what makes the result sound wide instead of filtered.

use crate::{
    context::AudioContext,
    graph::{extensions::NodeExt, filter::FilterNode},
    sound::SoundNode,
};

/// Create the rain texture.
pub fn rain(ctx: &mut AudioContext) -> SoundNode {
    let hiss = ctx
        .create_noise_source()
        .through(FilterNode::highpass(4_000.0));

    let shimmer = ctx
        .create_noise_source()
        .through(FilterNode::bandpass(8_000.0));

    // 70% hiss, 30% shimmer
    SoundNode::new(hiss.mix(shimmer, 0.3))
}
