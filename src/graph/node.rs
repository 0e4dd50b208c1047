use crate::error::SourceError;

/// Context passed to graph nodes during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - time: Context time in seconds at the first sample of the block
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub time: f64,
}

impl RenderCtx {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            time: 0.0,
        }
    }

    pub fn at(sample_rate: f32, time: f64) -> Self {
        Self { sample_rate, time }
    }
}

/// Trait for nodes that support parameter modulation
pub trait Modulatable: Send {
    type Param: Copy + Send;

    fn get_param(&self, param: Self::Param) -> f32;

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32);
}

/// Core trait for audio processing graph nodes
///
/// Generators (noise, oscillators, LFOs) overwrite `out`; effects (filters,
/// gains) process it in place. Generators are single-use sources: they are
/// silent until started, silent again once stopped, and can be neither
/// restarted nor stopped twice.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Start every source in this node.
    ///
    /// Default implementation does nothing (effects have no lifecycle).
    fn start(&mut self) -> Result<(), SourceError> {
        Ok(())
    }

    /// Stop every source in this node.
    ///
    /// Default implementation does nothing (effects have no lifecycle).
    fn stop(&mut self) -> Result<(), SourceError> {
        Ok(())
    }

    /// Number of sources (noise buffers, oscillators, LFOs) in this node.
    fn source_count(&self) -> usize {
        0
    }

    /// Number of sources currently running.
    fn running_sources(&self) -> usize {
        0
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn start(&mut self) -> Result<(), SourceError> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<(), SourceError> {
        (**self).stop()
    }

    fn source_count(&self) -> usize {
        (**self).source_count()
    }

    fn running_sources(&self) -> usize {
        (**self).running_sources()
    }
}
