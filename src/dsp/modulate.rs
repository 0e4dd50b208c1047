//! Modulation math shared by graph nodes.

/*
Parameter Modulation
====================

Modulation means letting one signal (usually an LFO) move a parameter of
another node over time. Every ambient texture with "motion" is built this
way:

    Wind:      LFO (0.15 Hz sine)   → band-pass center frequency
    Fireplace: LFO (6 Hz square)    → gain of the crackle layer
    Thunder:   LFO (0.08 Hz sine)   → gain of the rumble
    Birds:     LFO (4-10 Hz sine)   → oscillator pitch (chirps)
               LFO (0.3-0.8 Hz)     → oscillator level (intermittency)

The formula is always the same:

    modulated = base + (modulator × depth)

With base = 600 Hz, depth = 400 Hz and a sine swinging -1..+1, the wind
filter sweeps 200 Hz ↔ 1000 Hz.


Block-Rate Modulation
---------------------

We apply modulation once per rendered block rather than once per sample.
Recomputing filter coefficients 48000 times a second buys nothing for a
control signal that moves at 0.08-10 Hz. A 512-sample block at 48 kHz is
~10.7 ms; a 10 Hz LFO still gets ~19 updates per cycle.

The block's single modulator value is the AVERAGE of the LFO samples in
that block, which tracks the middle of the block and smooths the steps.


Clamping
--------

The target node clamps: a filter keeps its cutoff in [20, 20000] Hz, a
gain keeps its level non-negative. Pick base/depth so the range stays
valid (the fireplace crackle gain 0.6 ± 0.4 never goes negative).
*/

/// Calculate the average of a modulator signal over a block.
///
/// Used for block-rate modulation: one value stands in for the entire
/// block's worth of modulator samples.
#[inline]
pub fn block_average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}
