use crate::error::SourceError;

/// Lifecycle of a single-use source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl SourceState {
    pub fn start(&mut self) -> Result<(), SourceError> {
        match *self {
            SourceState::Idle => {
                *self = SourceState::Running;
                Ok(())
            }
            SourceState::Running | SourceState::Stopped => Err(SourceError::AlreadyStarted),
        }
    }

    pub fn stop(&mut self) -> Result<(), SourceError> {
        match *self {
            SourceState::Running => {
                *self = SourceState::Stopped;
                Ok(())
            }
            SourceState::Idle => Err(SourceError::NotStarted),
            SourceState::Stopped => Err(SourceError::AlreadyStopped),
        }
    }

    pub fn is_running(&self) -> bool {
        *self == SourceState::Running
    }
}
