//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with what a texture recipe
//! needs: single-use source lifecycle, parameter modulation and block-based
//! rendering. The `extensions` module adds fluent helpers so recipes read as
//! a chain: `noise.through(filter).gain(0.4).sum(other)`.

/// Looping playback of a noise buffer.
pub mod buffer_source;
/// Fluent combinators (`.through()`, `.mix()`, `.sum()`, etc.).
pub mod extensions;
/// Topology-preserving filter node with multiple responses.
pub mod filter;
/// Fixed gain stage, modulatable for tremolo-style motion.
pub mod gain;
/// Low frequency oscillators for parameter modulation.
pub mod lfo;
/// Linear weighted mixing for parallel graphs.
pub mod mix;
/// Connect modulation sources to node parameters.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators.
pub mod oscillator;
/// Single-use start/stop bookkeeping shared by every source.
pub mod source;
/// Additive summing of parallel graphs.
pub mod sum;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, Modulatable, RenderCtx};
