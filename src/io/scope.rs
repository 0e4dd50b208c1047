//! Lock-free sample feed from the audio callback to a visualizer.
//!
//! The audio side pushes with [`ScopeTap::push`], which never blocks and
//! drops samples once the ring is full. The UI side drains into a sliding
//! window of the most recent samples.

use rtrb::{Consumer, Producer, RingBuffer};

pub struct ScopeTap {
    tx: Producer<f32>,
    dropped: usize,
}

impl ScopeTap {
    /// Push as much of `samples` as fits. Returns how many were accepted.
    pub fn push(&mut self, samples: &[f32]) -> usize {
        let mut accepted = 0;
        for &sample in samples {
            if self.tx.push(sample).is_err() {
                break;
            }
            accepted += 1;
        }
        self.dropped += samples.len() - accepted;
        accepted
    }

    /// Samples discarded because the reader fell behind.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

pub struct ScopeReader {
    rx: Consumer<f32>,
    window: Vec<f32>,
    window_len: usize,
}

impl ScopeReader {
    /// Pull everything pending into the window. Returns the number of new
    /// samples.
    pub fn poll(&mut self) -> usize {
        let mut received = 0;
        while let Ok(sample) = self.rx.pop() {
            self.window.push(sample);
            received += 1;
        }

        if self.window.len() > self.window_len {
            let excess = self.window.len() - self.window_len;
            self.window.drain(..excess);
        }
        received
    }

    /// The most recent samples, oldest first. Zero-filled until enough
    /// audio has arrived.
    pub fn window(&self) -> &[f32] {
        &self.window
    }
}

/// A connected tap/reader pair. `capacity` bounds the ring, `window_len`
/// the reader's history.
pub fn scope(capacity: usize, window_len: usize) -> (ScopeTap, ScopeReader) {
    let (tx, rx) = RingBuffer::new(capacity);
    (
        ScopeTap { tx, dropped: 0 },
        ScopeReader {
            rx,
            window: vec![0.0; window_len],
            window_len,
        },
    )
}
