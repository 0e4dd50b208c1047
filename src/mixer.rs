//! The front-end's view of the ambiance channels.
//!
//! The mixer owns what the user sees: a volume and an on/off switch per
//! channel. It never renders audio. [`MixerState::sync`] pushes its state
//! into an [`Engine`], which decides how to get there without clicks.

#[cfg(feature = "serde")]
use std::{fs, io, path::Path};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "serde")]
use crate::error::MixerError;
use crate::{
    engine::{clamp_volume, Engine, EngineConfig},
    textures::ChannelId,
};

/// Volume restored when a silent channel is switched on.
pub const DEFAULT_TOGGLE_VOLUME: f32 = 0.5;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct SoundChannel {
    pub id: ChannelId,
    pub name: String,
    pub volume: f32,
    pub icon: String,
    pub is_playing: bool,
}

impl SoundChannel {
    /// Silent and off.
    pub fn new(id: ChannelId) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            volume: 0.0,
            icon: id.icon().to_string(),
            is_playing: false,
        }
    }

    /// Whether the engine should be producing this channel.
    pub fn is_audible(&self) -> bool {
        self.is_playing && self.volume > 0.0
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct MixerState {
    pub engine: EngineConfig,
    pub channels: Vec<SoundChannel>,
}

impl Default for MixerState {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            channels: ChannelId::ALL.into_iter().map(SoundChannel::new).collect(),
        }
    }
}

impl MixerState {
    pub fn channel(&self, id: ChannelId) -> Option<&SoundChannel> {
        self.channels.iter().find(|c| c.id == id)
    }

    fn channel_mut(&mut self, id: ChannelId) -> Option<&mut SoundChannel> {
        self.channels.iter_mut().find(|c| c.id == id)
    }

    /// Moving the slider: any volume above 0 switches the channel on.
    pub fn set_volume(&mut self, id: ChannelId, volume: f32) {
        if let Some(channel) = self.channel_mut(id) {
            channel.volume = clamp_volume(volume);
            channel.is_playing = channel.volume > 0.0;
        }
    }

    /// Flip a channel. On restores its volume (or 0.5 if it had none), off
    /// zeroes it.
    pub fn toggle(&mut self, id: ChannelId) {
        if let Some(channel) = self.channel_mut(id) {
            if channel.is_playing {
                channel.is_playing = false;
                channel.volume = 0.0;
            } else {
                channel.is_playing = true;
                if channel.volume <= 0.0 {
                    channel.volume = DEFAULT_TOGGLE_VOLUME;
                }
            }
        }
    }

    /// Mute All.
    pub fn stop_all(&mut self) {
        for channel in &mut self.channels {
            channel.is_playing = false;
            channel.volume = 0.0;
        }
    }

    pub fn active_count(&self) -> usize {
        self.channels.iter().filter(|c| c.is_playing).count()
    }

    /// Drive `engine` toward this state.
    ///
    /// Audible channels are started (or ramped to their volume); everything
    /// else is stopped. Safe to call after every change.
    pub fn sync(&self, engine: &mut Engine) {
        for channel in &self.channels {
            if channel.is_audible() {
                engine.start_channel(channel.id, channel.volume);
            } else {
                engine.stop_channel(channel.id);
            }
        }
        debug!(active = self.active_count(), "mixer synced");
    }

    /// One entry per known channel, in catalogue order. Missing channels
    /// come back silent; duplicates keep the first.
    pub fn normalize(&mut self) {
        let mut channels = Vec::with_capacity(ChannelId::COUNT);
        for id in ChannelId::ALL {
            let mut channel = self
                .channel(id)
                .cloned()
                .unwrap_or_else(|| SoundChannel::new(id));
            channel.volume = clamp_volume(channel.volume);
            channels.push(channel);
        }
        self.channels = channels;
    }

    /// Read mixer state from `path`. A missing file yields the defaults.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MixerError> {
        let text = match fs::read_to_string(path.as_ref()) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };

        let mut state: MixerState = serde_json::from_str(&text)?;
        state.normalize();
        Ok(state)
    }

    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MixerError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
