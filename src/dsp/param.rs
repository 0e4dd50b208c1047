//! Smoothed parameter values.

/*
Click-Free Parameter Changes
============================

Jumping a gain from 0.0 to 0.6 between two samples produces a step in the
waveform, which the ear hears as a click. Every volume change in the engine
therefore glides toward its new value instead of stepping.

Exponential Approach ("set target at time")
-------------------------------------------

Given a target T and a time constant τ, the value follows

    v(t) = T + (v0 - T) · e^(-t/τ)

After one τ the value has covered ~63% of the distance, after three τ ~95%,
after five τ ~99.3%. Per sample at rate fs this becomes a one-pole smoother:

    α = 1 - e^(-1 / (τ · fs))
    v ← v + (T - v) · α

Unlike a linear ramp there is no end time to track, and retargeting
mid-glide is seamless: the curve simply bends toward the new target from
wherever it currently is.

    Level
     0.6 ┤          ╭──────────────
         │       ╭──╯
         │     ╭─╯
         │   ╭─╯
     0.0 ┼───╯
         └───┴────┴────┴────┴────→ time
            τ    2τ   3τ   4τ

Once the value is within `SNAP_EPSILON` (-80 dB) of the target it snaps
exactly onto it, so "after the ramp completes" has a precise meaning.
*/

const SNAP_EPSILON: f32 = 1e-4;

/// A parameter that glides toward a target with an exponential curve.
#[derive(Debug, Clone)]
pub struct AudioParam {
    value: f32,
    target: f32,
    time_constant: f32,
}

impl AudioParam {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            time_constant: 0.0,
        }
    }

    /// Current (smoothed) value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the parameter is heading toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the value has reached its target.
    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    /// Jump immediately, cancelling any glide.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.time_constant = 0.0;
    }

    /// Glide from the current value toward `target`.
    ///
    /// A non-positive `time_constant` behaves like [`set_value`](Self::set_value).
    pub fn set_target(&mut self, target: f32, time_constant: f32) {
        if time_constant <= 0.0 {
            self.set_value(target);
            return;
        }
        self.target = target;
        self.time_constant = time_constant;
    }

    /// Per-sample smoothing coefficient for the active glide.
    #[inline]
    fn coefficient(&self, sample_rate: f32) -> f32 {
        1.0 - (-1.0 / (self.time_constant * sample_rate)).exp()
    }

    /// Advance by one sample and return the new value.
    #[inline]
    pub fn next_sample(&mut self, sample_rate: f32) -> f32 {
        if self.is_settled() {
            return self.value;
        }
        let alpha = self.coefficient(sample_rate);
        self.step(alpha)
    }

    #[inline]
    fn step(&mut self, alpha: f32) -> f32 {
        let next = self.value + (self.target - self.value) * alpha;
        // f32 rounding can stall the approach short of the target
        if next == self.value || (self.target - next).abs() < SNAP_EPSILON {
            self.value = self.target;
        } else {
            self.value = next;
        }
        self.value
    }

    /// Multiply `buffer` in place by the gliding value, one step per sample.
    pub fn apply(&mut self, buffer: &mut [f32], sample_rate: f32) {
        if self.is_settled() {
            let gain = self.value;
            for sample in buffer.iter_mut() {
                *sample *= gain;
            }
            return;
        }

        let alpha = self.coefficient(sample_rate);
        for sample in buffer.iter_mut() {
            *sample *= self.step(alpha);
        }
    }

    /// Advance by `frames` samples without processing audio.
    pub fn advance(&mut self, frames: usize, sample_rate: f32) {
        if self.is_settled() {
            return;
        }
        let alpha = self.coefficient(sample_rate);
        for _ in 0..frames {
            if self.is_settled() {
                break;
            }
            self.step(alpha);
        }
    }
}

impl Default for AudioParam {
    fn default() -> Self {
        Self::new(0.0)
    }
}
