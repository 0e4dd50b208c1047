use crate::{
    error::SourceError,
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/// Additive combination of two parallel graphs: `out = A + B`.
///
/// Unlike [`Mix`](crate::graph::mix::Mix) nothing is rebalanced; each side
/// keeps the level it was built with. Layers are weighted up front with
/// `.gain()`, e.g. the fire's crackle plus its rumble at 0.4.
pub struct Sum<A, B> {
    pub source_a: A,
    pub source_b: B,
    temp_buffer: Vec<f32>,
}

impl<A, B> Sum<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Self {
            source_a,
            source_b,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: GraphNode, B: GraphNode> GraphNode for Sum<A, B> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source_a.render_block(out, ctx);

        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);
        self.source_b.render_block(frames, ctx);

        for (o, b) in out.iter_mut().zip(frames.iter()) {
            *o += *b;
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
