pub mod context; // Audio context: clock, run state, node factories
pub mod dsp;
pub mod engine; // Channel registry and the start/stop/volume facade
pub mod error;
pub mod graph; // Composable audio graph nodes
pub mod io;
pub mod mixer; // UI-side channel model that drives the engine
pub mod sound;
pub mod textures; // The six ambient recipes

pub use context::AudioContext;
pub use engine::{ChannelState, Engine, EngineConfig};
pub use error::{SourceError, UnknownChannel};
pub use sound::SoundNode;
pub use textures::ChannelId;

pub const MAX_BLOCK_SIZE: usize = 2048;
