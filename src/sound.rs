//! One channel's synthesis graph plus its master gain.

use tracing::trace;

use crate::{
    dsp::param::AudioParam,
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Running,
    Stopped,
}

/// The runtime form of one active channel.
///
/// `gain` is the terminal volume control; the graph never reaches the output
/// except through it. `start` and `stop` are idempotent wrappers around the
/// single-use sources inside the graph: a node is started at most once and
/// its sources are stopped at most once. Restarting a channel means building
/// a new `SoundNode`.
pub struct SoundNode {
    pub gain: AudioParam,
    graph: Box<dyn GraphNode>,
    lifecycle: Lifecycle,
}

impl SoundNode {
    /// Wrap a graph with a master gain at 0.
    pub fn new<N: GraphNode + 'static>(graph: N) -> Self {
        Self {
            gain: AudioParam::new(0.0),
            graph: Box::new(graph),
            lifecycle: Lifecycle::Idle,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn source_count(&self) -> usize {
        self.graph.source_count()
    }

    pub fn running_sources(&self) -> usize {
        self.graph.running_sources()
    }

    pub fn start(&mut self) {
        if self.lifecycle != Lifecycle::Idle {
            return;
        }
        if let Err(err) = self.graph.start() {
            trace!(%err, "ignored source error on start");
        }
        self.lifecycle = Lifecycle::Running;
    }

    /// Safe to call in any state, including never started.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Stopped {
            return;
        }
        if let Err(err) = self.graph.stop() {
            trace!(%err, "ignored source error on stop");
        }
        self.lifecycle = Lifecycle::Stopped;
    }

    /// Render the graph and apply the smoothed master gain.
    ///
    /// Buffers of any length are fine; the graph sees at most
    /// `MAX_BLOCK_SIZE` samples at a time.
    pub fn render(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.graph.render_block(block, ctx);
            self.gain.apply(block, ctx.sample_rate);
        }
    }
}
