use crate::{
    dsp::modulate::block_average,
    error::SourceError,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Connects an LFO (or any signal) to a parameter on another node.

  // Wind: LFO sweeps a band-pass center 200 ↔ 1000 Hz
  let gusts = FilterNode::bandpass(600.0)
      .modulate(LfoNode::sine(0.15), FilterParam::Cutoff, 400.0);

  // Crackle: square LFO gates a gain between 0.2 and 1.0
  let crackle = GainNode::new(0.6)
      .modulate(LfoNode::square(6.0), GainParam::Level, 0.4);

Depth controls how far the parameter moves:

    modulated_value = base_value + (LFO × depth)

See `dsp/modulate.rs` for the block-rate averaging details.

The LFO is owned by this node, so starting or stopping the modulated node
starts or stops its LFO too.
*/

pub struct Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    source: S,            // The node being modulated (e.g., FilterNode)
    lfo: L,               // The modulation source (e.g., LfoNode)
    param: S::Param,      // Which parameter to modulate (e.g., FilterParam::Cutoff)
    depth: f32,           // Modulation amount (scales LFO output)
    lfo_buffer: Vec<f32>, // Temp buffer for LFO output
}

impl<S, L> Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub fn new(source: S, lfo: L, param: S::Param, depth: f32) -> Self {
        Self {
            source,
            lfo,
            param,
            depth,
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn inner(&self) -> &S {
        &self.source
    }
}

impl<S, L> GraphNode for Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let len = out.len();

        // Render LFO to temp buffer (values in [-1.0, +1.0])
        self.lfo.render_block(&mut self.lfo_buffer[..len], ctx);
        let lfo_avg = block_average(&self.lfo_buffer[..len]);

        // Calculate and apply modulation
        let base_value = self.source.get_param(self.param);
        let modulation = lfo_avg * self.depth;
        self.source
            .apply_modulation(self.param, base_value, modulation);

        // Render the source with modulated parameter
        self.source.render_block(out, ctx);
    }

    fn start(&mut self) -> Result<(), SourceError> {
        let source = self.source.start();
        let lfo = self.lfo.start();
        source.and(lfo)
    }

    fn stop(&mut self) -> Result<(), SourceError> {
        let source = self.source.stop();
        let lfo = self.lfo.stop();
        source.and(lfo)
    }

    fn source_count(&self) -> usize {
        self.source.source_count() + self.lfo.source_count()
    }

    fn running_sources(&self) -> usize {
        self.source.running_sources() + self.lfo.running_sources()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{
        extensions::NodeExt,
        filter::{FilterNode, FilterParam},
        gain::{GainNode, GainParam},
        lfo::LfoNode,
    };

    #[test]
    fn test_modulation_preserves_base_value() {
        let mut node = FilterNode::lowpass(1000.0)
            .modulate(LfoNode::sine(5.0), FilterParam::Cutoff, 500.0);
        node.start().unwrap();

        let ctx = RenderCtx::new(48_000.0);
        let mut buffer = vec![0.0; 128];
        for _ in 0..50 {
            node.render_block(&mut buffer, &ctx);
        }

        assert_eq!(node.inner().get_param(FilterParam::Cutoff), 1000.0);
        let cutoff = node.inner().cutoff();
        assert!((500.0..=1500.0).contains(&cutoff), "cutoff={cutoff}");
    }

    #[test]
    fn test_unstarted_lfo_leaves_base_value() {
        let mut node = GainNode::new(0.6)
            .modulate(LfoNode::square(6.0), GainParam::Level, 0.4);

        let mut buffer = vec![1.0; 128];
        node.render_block(&mut buffer, &RenderCtx::new(48_000.0));

        assert_eq!(node.inner().level(), 0.6);
        assert!(buffer.iter().all(|&s| (s - 0.6).abs() < 1e-6));
    }

    #[test]
    fn test_square_lfo_gates_gain_between_bounds() {
        let mut node = GainNode::new(0.6)
            .modulate(LfoNode::square(6.0), GainParam::Level, 0.4);
        node.start().unwrap();

        // 64-sample blocks sit entirely inside one half-cycle almost always
        let ctx = RenderCtx::new(48_000.0);
        let mut levels = Vec::new();
        for _ in 0..750 {
            let mut buffer = vec![1.0; 64];
            node.render_block(&mut buffer, &ctx);
            levels.push(node.inner().level());
        }

        let high = levels.iter().filter(|&&l| (l - 1.0).abs() < 1e-6).count();
        let low = levels.iter().filter(|&&l| (l - 0.2).abs() < 1e-6).count();
        assert!(high > 300 && low > 300, "high={high} low={low}");
        assert!(levels.iter().all(|&l| (0.2 - 1e-6..=1.0 + 1e-6).contains(&l)));
    }
}
