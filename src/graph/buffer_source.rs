use crate::{
    dsp::noise::NoiseBuffer,
    error::SourceError,
    graph::{
        node::{GraphNode, RenderCtx},
        source::SourceState,
    },
};

/// Looping playback of a [`NoiseBuffer`].
///
/// This is the raw excitation for every noise-based texture. Each instance
/// owns its own buffer, so two sources in one recipe are uncorrelated.
pub struct BufferSourceNode {
    buffer: NoiseBuffer,
    position: usize,
    state: SourceState,
}

impl BufferSourceNode {
    pub fn new(buffer: NoiseBuffer) -> Self {
        Self {
            buffer,
            position: 0,
            state: SourceState::Idle,
        }
    }

    pub fn buffer(&self) -> &NoiseBuffer {
        &self.buffer
    }

    pub fn state(&self) -> SourceState {
        self.state
    }
}

impl GraphNode for BufferSourceNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        if !self.state.is_running() || self.buffer.is_empty() {
            out.fill(0.0);
            return;
        }

        let samples = self.buffer.samples();
        let mut written = 0;
        while written < out.len() {
            // Copy up to the loop point, then wrap
            let run = (samples.len() - self.position).min(out.len() - written);
            out[written..written + run]
                .copy_from_slice(&samples[self.position..self.position + run]);
            written += run;
            self.position = (self.position + run) % samples.len();
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn source(len_seconds: f32) -> BufferSourceNode {
        let mut rng = Pcg32::seed_from_u64(11);
        BufferSourceNode::new(NoiseBuffer::white(1_000.0, len_seconds, &mut rng))
    }

    #[test]
    fn silent_until_started() {
        let mut node = source(0.1);
        let mut buffer = vec![1.0f32; 64];
        node.render_block(&mut buffer, &RenderCtx::new(1_000.0));
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn loops_the_buffer() {
        let mut node = source(0.1); // 100 samples
        let expected: Vec<f32> = node.buffer().samples().to_vec();
        node.start().unwrap();

        let mut buffer = vec![0.0f32; 250];
        node.render_block(&mut buffer, &RenderCtx::new(1_000.0));

        assert_eq!(&buffer[..100], &expected[..]);
        assert_eq!(&buffer[100..200], &expected[..]);
        assert_eq!(&buffer[200..], &expected[..50]);
    }

    #[test]
    fn silent_after_stop() {
        let mut node = source(0.1);
        node.start().unwrap();
        node.stop().unwrap();

        let mut buffer = vec![1.0f32; 64];
        node.render_block(&mut buffer, &RenderCtx::new(1_000.0));
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn cannot_restart() {
        let mut node = source(0.1);
        node.start().unwrap();
        node.stop().unwrap();
        assert_eq!(node.start(), Err(SourceError::AlreadyStarted));
        assert_eq!(node.stop(), Err(SourceError::AlreadyStopped));
    }
}
