//! Real-world scenario benchmarks.
//!
//! Single textures at full gain, and the engine rendering several
//! channels at once.

mod mix;
mod textures;

pub use mix::bench_mix;
pub use textures::bench_textures;
