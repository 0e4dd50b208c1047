use crate::{
    error::SourceError,
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Parallel Signal Mixing
======================

The Mix node combines two audio signals in parallel using a linear weighted
sum:

    output = (A × (1 - balance)) + (B × balance)

  - balance = 0.0 → 100% A
  - balance = 0.3 → 70% A, 30% B   (rain: hiss 0.7, shimmer 0.3)
  - balance = 1.0 → 100% B

Linear weights keep the arithmetic obvious: the two weights always add to
one, so mixing two layers never raises the overall level. When two layers
should simply add (each already weighted), use `.sum()` instead.

Example usage:
  let hiss = noise_a.through(FilterNode::highpass(4000.0));
  let shimmer = noise_b.through(FilterNode::bandpass(8000.0));
  let rain = hiss.mix(shimmer, 0.3);
*/

pub struct Mix<A, B> {
    pub source_a: A,
    pub source_b: B,
    pub balance: f32, // 0.0 = all A, 1.0 = all B
    temp_buffer: Vec<f32>,
}

impl<A, B> Mix<A, B> {
    pub fn new(source_a: A, source_b: B, balance: f32) -> Self {
        Mix {
            source_a,
            source_b,
            balance: balance.clamp(0.0, 1.0),
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<S: GraphNode, M: GraphNode> GraphNode for Mix<S, M> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source_a.render_block(out, ctx);

        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);

        self.source_b.render_block(frames, ctx);

        let weight_a = 1.0 - self.balance;
        let weight_b = self.balance;
        for (o, b) in out.iter_mut().zip(frames.iter()) {
            *o = (*o * weight_a) + (*b * weight_b);
        }
    }

    fn start(&mut self) -> Result<(), SourceError> {
        let a = self.source_a.start();
        let b = self.source_b.start();
        a.and(b)
    }

    fn stop(&mut self) -> Result<(), SourceError> {
        let a = self.source_a.stop();
        let b = self.source_b.stop();
        a.and(b)
    }

    fn source_count(&self) -> usize {
        self.source_a.source_count() + self.source_b.source_count()
    }

    fn running_sources(&self) -> usize {
        self.source_a.running_sources() + self.source_b.running_sources()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{extensions::NodeExt, oscillator::OscNode};

    fn render<N: GraphNode>(node: &mut N) -> Vec<f32> {
        node.start().unwrap();
        let mut buffer = vec![0.0; 256];
        node.render_block(&mut buffer, &RenderCtx::new(48_000.0));
        buffer
    }

    #[test]
    fn test_mix_weights_sum_to_one() {
        // Identical sources: any balance reproduces the source
        let mut mixed = OscNode::sine(440.0).mix(OscNode::sine(440.0), 0.3);
        let mut single = OscNode::sine(440.0);

        let a = render(&mut mixed);
        let b = render(&mut single);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-5);
        }
    }

    #[test]
    fn test_mix_extremes_select_one_side() {
        let mut all_a = OscNode::sine(440.0).mix(OscNode::sine(880.0), 0.0);
        let mut only_a = OscNode::sine(440.0);

        let a = render(&mut all_a);
        let b = render(&mut only_a);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_balance_is_clamped() {
        let mixed = OscNode::sine(440.0).mix(OscNode::sine(880.0), 1.7);
        assert_eq!(mixed.balance, 1.0);
    }
}
