use crate::{
    dsp::filter::{FilterType, SVFilter},
    graph::node::{GraphNode, Modulatable, RenderCtx},
};

/*
State-Variable Filter (SVF)
===========================

White noise contains every frequency at once. A filter keeps a region of
the spectrum and discards the rest, and that region is most of what makes
noise sound like rain rather than wind.

Filter Types:
-------------

Lowpass (LP): Passes frequencies BELOW the cutoff.
  - 120 Hz:  distant thunder rumble
  - 200 Hz:  brown-noise "waterfall behind a wall"
  - 300 Hz:  embers/body of a fire

Highpass (HP): Passes frequencies ABOVE the cutoff.
  - 4 kHz:   the fine hiss of rain on a roof

Bandpass (BP): Passes frequencies AROUND the cutoff.
  - 600 Hz:  wind, especially when the center moves
  - 3 kHz:   crackle (narrow, Q 2)
  - 8 kHz:   droplet shimmer on top of rain

Parameters:
-----------

Cutoff (Hz): The frequency where the filter takes effect.

Q: Width/emphasis around the cutoff.
  - 0.5:  Broad, soft (wind, brown noise)
  - 1.0:  Default
  - 2.0+: Narrow, pronounced peak (crackle)

Example usage:
  // Wind: a broad band-pass whose center drifts 200 ↔ 1000 Hz
  let wind = FilterNode::bandpass(600.0)
      .with_q(0.5)
      .modulate(LfoNode::sine(0.15), FilterParam::Cutoff, 400.0);
*/

#[derive(Clone, Copy, Debug)]
pub enum FilterParam {
    Cutoff,
    Q,
}

pub struct FilterNode {
    filter: SVFilter,
    base_cutoff: f32,
    base_q: f32,
}

impl FilterNode {
    fn new(filter: SVFilter) -> Self {
        Self {
            base_cutoff: filter.cutoff_hz,
            base_q: filter.q,
            filter,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(SVFilter::lowpass(cutoff_hz))
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(SVFilter::highpass(cutoff_hz))
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self::new(SVFilter::bandpass(cutoff_hz))
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.filter.set_q(q);
        self.base_q = self.filter.q;
        self
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter.filter_type()
    }

    /// Cutoff currently in effect (after modulation).
    pub fn cutoff(&self) -> f32 {
        self.filter.cutoff_hz
    }

    pub fn q(&self) -> f32 {
        self.filter.q
    }
}

impl Modulatable for FilterNode {
    type Param = FilterParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            FilterParam::Cutoff => self.base_cutoff,
            FilterParam::Q => self.base_q,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        let final_value = base + modulation;
        match param {
            FilterParam::Cutoff => {
                self.base_cutoff = base;
                self.filter.set_cutoff(final_value.clamp(20.0, 20_000.0));
            }
            FilterParam::Q => {
                self.base_q = base;
                self.filter.set_q(final_value.clamp(0.05, 20.0));
            }
        }
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }
}
