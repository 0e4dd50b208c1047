//! Error types.
//!
//! None of these reach the engine facade: source errors are swallowed by
//! [`SoundNode`](crate::sound::SoundNode) and unknown channel ids turn into
//! no-ops. They exist so the lower layers stay honest about what went wrong.

use thiserror::Error;

/// Violations of the single-use source lifecycle.
///
/// A source can be started once and stopped once. Anything else is an
/// error, mirroring how real-time audio hosts treat scheduled sources.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    #[error("source has already been started")]
    AlreadyStarted,

    #[error("source was never started")]
    NotStarted,

    #[error("source has already been stopped")]
    AlreadyStopped,
}

/// A channel id outside the recognized set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown channel id: {0:?}")]
pub struct UnknownChannel(pub String);

/// Errors loading or saving mixer state.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum MixerError {
    #[error("failed to access mixer state file")]
    Io(#[from] std::io::Error),

    #[error("mixer state is not valid JSON")]
    Json(#[from] serde_json::Error),
}
