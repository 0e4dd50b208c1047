//! White-noise buffers.

/*
Noise as Raw Material
=====================

Every ambient texture starts from the same excitation: uniformly
distributed random samples in [-1, 1]. White noise has equal energy at
every frequency, so filtering it picks out the "personality":

    low-pass  ~200 Hz   →  brown-noise rumble, thunder
    high-pass ~4 kHz    →  rain hiss
    band-pass ~3 kHz    →  fire crackle
    band-pass ~600 Hz   →  wind (swept)

Rather than generating random numbers on the audio thread, we fill a short
buffer (2 seconds by default) once and loop it. Two seconds is long enough
that the loop point is inaudible once the noise has been filtered and
modulated.

Randomness comes from any `rand::Rng`. The engine uses a `Pcg32` that is
either seeded from configuration (reproducible renders and tests) or from
entropy.
*/

use rand::Rng;

/// An immutable block of uniform random samples in `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct NoiseBuffer {
    samples: Vec<f32>,
    sample_rate: f32,
}

impl NoiseBuffer {
    /// Fill `round(seconds × sample_rate)` samples (at least one) from `rng`.
    pub fn white<R: Rng + ?Sized>(sample_rate: f32, seconds: f32, rng: &mut R) -> Self {
        let len = ((seconds * sample_rate).round() as usize).max(1);
        let samples = (0..len).map(|_| rng.gen_range(-1.0f32..=1.0)).collect();

        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate
    }
}
