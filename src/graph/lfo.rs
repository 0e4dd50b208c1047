use crate::{
    dsp::oscillator::OscillatorBlock,
    error::SourceError,
    graph::{
        node::{GraphNode, RenderCtx},
        source::SourceState,
    },
};

/*
LFO (Low Frequency Oscillator)
==============================

An LFO is an oscillator that runs at sub-audio frequencies to move
parameters over time. It outputs -1.0 to +1.0 (bipolar); `.modulate()`
scales that by a depth and adds it to the parameter's base value.

Rates used by the ambient textures:

    0.08 Hz  sine    Thunder swell (one roll every ~12 s)
    0.15 Hz  sine    Wind gusts sweeping a band-pass
    0.3-0.8  sine    Birds fading in and out
    4-10 Hz  sine    Bird chirps (pitch flutter)
    6 Hz     square  Fire crackle gating

Like any source, an LFO outputs nothing until started, which leaves the
modulated parameter at its base value.
*/

pub struct LfoNode {
    osc: OscillatorBlock,
    frequency: f32, // Fixed frequency in Hz
    state: SourceState,
}

impl LfoNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::sine(),
            frequency,
            state: SourceState::Idle,
        }
    }

    pub fn square(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::square(),
            frequency,
            state: SourceState::Idle,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl GraphNode for LfoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if !self.state.is_running() {
            out.fill(0.0);
            return;
        }
        self.osc.render(out, self.frequency, ctx.sample_rate);
    }

    fn start(&mut self) -> Result<(), SourceError> {
        self.state.start()
    }

    fn stop(&mut self) -> Result<(), SourceError> {
        self.state.stop()
    }

    fn source_count(&self) -> usize {
        1
    }

    fn running_sources(&self) -> usize {
        usize::from(self.state.is_running())
    }
}
