//! The audio context: clock, run state and node factories.
//!
//! One context exists per [`Engine`](crate::engine::Engine). It is created
//! on the first sound request, starts out suspended, and is resumed by the
//! engine before any channel is started. It is never torn down.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::{info, warn};

use crate::{
    dsp::noise::NoiseBuffer,
    graph::{buffer_source::BufferSourceNode, node::RenderCtx},
};

/// Used when a configured sample rate is not a positive, finite number.
pub const FALLBACK_SAMPLE_RATE: f32 = 48_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Clock frozen, output silent.
    Suspended,
    Running,
}

pub struct AudioContext {
    sample_rate: f32,
    frames: u64,
    state: ContextState,
    noise_seconds: f32,
    rng: Pcg32,
}

impl AudioContext {
    /// Create a suspended context.
    ///
    /// With a `seed` every noise buffer and randomized recipe parameter is
    /// reproducible; without one the generator is seeded from entropy.
    /// A sample rate that is not positive and finite falls back to
    /// [`FALLBACK_SAMPLE_RATE`].
    pub fn new(sample_rate: f32, noise_seconds: f32, seed: Option<u64>) -> Self {
        let sample_rate = if sample_rate.is_finite() && sample_rate > 0.0 {
            sample_rate
        } else {
            warn!(sample_rate, fallback = FALLBACK_SAMPLE_RATE, "invalid sample rate");
            FALLBACK_SAMPLE_RATE
        };

        let rng = match seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_entropy(),
        };

        Self {
            sample_rate,
            frames: 0,
            state: ContextState::Suspended,
            noise_seconds,
            rng,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ContextState::Running
    }

    /// Frames rendered while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Context time in seconds.
    pub fn current_time(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    /// Resume a suspended context. Returns whether the state changed.
    pub fn resume(&mut self) -> bool {
        if self.state == ContextState::Running {
            return false;
        }
        self.state = ContextState::Running;
        info!(
            sample_rate = self.sample_rate,
            time = self.current_time(),
            "audio context resumed"
        );
        true
    }

    pub fn suspend(&mut self) {
        if self.state == ContextState::Running {
            self.state = ContextState::Suspended;
            info!(time = self.current_time(), "audio context suspended");
        }
    }

    pub fn render_ctx(&self) -> RenderCtx {
        RenderCtx::at(self.sample_rate, self.current_time())
    }

    /// A fresh buffer of white noise, `noise_seconds` long.
    pub fn create_noise_buffer(&mut self) -> NoiseBuffer {
        NoiseBuffer::white(self.sample_rate, self.noise_seconds, &mut self.rng)
    }

    /// A looping source over a fresh noise buffer (not started).
    pub fn create_noise_source(&mut self) -> BufferSourceNode {
        BufferSourceNode::new(self.create_noise_buffer())
    }

    /// Draw a value from `range` with the context's generator.
    pub fn random_range(&mut self, range: Range<f32>) -> f32 {
        self.rng.gen_range(range)
    }

    pub(crate) fn advance(&mut self, frames: usize) {
        if self.is_running() {
            self.frames += frames as u64;
        }
    }
}
