use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

/// Gain stage: multiplies the signal flowing through it by a level.
///
/// Used as an effect (`.through(GainNode::new(0.4))` or `.gain(0.4)`) to
/// weight a layer, and with `.modulate()` for tremolo-style motion such as
/// the fire's crackle gating or the slow thunder swell. The level is
/// applied per block; the per-sample smoothed master gain of a channel
/// lives on [`SoundNode`](crate::sound::SoundNode).
pub struct GainNode {
    base_level: f32,
    level: f32,
}

#[derive(Clone, Copy, Debug)]
pub enum GainParam {
    Level,
}

impl GainNode {
    pub fn new(level: f32) -> Self {
        let level = level.max(0.0);
        Self {
            base_level: level,
            level,
        }
    }

    /// Level currently in effect (after modulation).
    pub fn level(&self) -> f32 {
        self.level
    }
}

impl GraphNode for GainNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        let level = self.level;
        for sample in out.iter_mut() {
            *sample *= level;
        }
    }
}

impl Modulatable for GainNode {
    type Param = GainParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            GainParam::Level => self.base_level,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        match param {
            GainParam::Level => {
                self.base_level = base;
                self.level = (base + modulation).max(0.0);
            }
        }
    }
}
