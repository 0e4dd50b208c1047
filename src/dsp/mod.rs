//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free once constructed and realtime-safe,
//! so they can be embedded directly inside graph nodes. They stay focused on
//! the signal-processing math; the graph layer adds lifecycle and modulation.

/// State-variable filter implementation with multiple responses.
pub mod filter;
/// Block-rate modulation helpers.
pub mod modulate;
/// White-noise buffers for looping buffer sources.
pub mod noise;
/// Phase-accumulator oscillator waveforms.
pub mod oscillator;
/// Smoothed parameters (exponential approach to a target).
pub mod param;

pub use noise::NoiseBuffer;
pub use param::AudioParam;
