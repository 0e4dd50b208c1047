//! Getting rendered audio out: device buffers and the visualizer tap.

#[cfg(feature = "rtrb")]
pub mod scope;

/// Copy a mono block into an interleaved device buffer, same sample on
/// every channel.
///
/// Writes `min(block.len(), data.len() / channels)` frames starting at the
/// front of `data` and returns how many were written.
pub fn write_interleaved(block: &[f32], data: &mut [f32], channels: usize) -> usize {
    if channels == 0 {
        return 0;
    }

    let mut frames = 0;
    for (frame, &sample) in data.chunks_exact_mut(channels).zip(block) {
        frame.fill(sample);
        frames += 1;
    }
    frames
}
