use crate::{
    error::SourceError,
    graph::node::{GraphNode, RenderCtx},
};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series, passing the output of the first
(source) into the second (effect). It is the backbone of every texture:
noise → filter → gain.

How It Works:
-------------
1. Render the source into the output buffer
2. Pass that buffer through the effect (in-place processing)

  Source renders:  [0.5, 0.8, -0.3, 0.9, ...]
  Effect processes in-place (e.g., filter)
  Final output:    [0.4, 0.6, -0.2, 0.7, ...]  (filtered result)

Signal Flow Diagram:
--------------------
  Through: [Source] ──→ [Effect] ──→ output

  Mix:     [A] ──┬──→ (A·(1-b) + B·b) ──→ output
           [B] ──┘

  Sum:     [A] ──┬──→ (+) ──→ output
           [B] ──┘

Lifecycle calls (start/stop) reach both sides, so an effect that hides
sources of its own (a modulated filter carries an LFO) is started with the
chain.
*/

pub struct Through<S, F> {
    source: S,
    filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }

    fn start(&mut self) -> Result<(), SourceError> {
        let source = self.source.start();
        let filter = self.filter.start();
        source.and(filter)
    }

    fn stop(&mut self) -> Result<(), SourceError> {
        let source = self.source.stop();
        let filter = self.filter.stop();
        source.and(filter)
    }

    fn source_count(&self) -> usize {
        self.source.source_count() + self.filter.source_count()
    }

    fn running_sources(&self) -> usize {
        self.source.running_sources() + self.filter.running_sources()
    }
}
