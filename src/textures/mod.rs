//! The six ambient textures and the channel catalogue.
//!
//! Each texture is a recipe: a function from the [`AudioContext`] to a fully
//! wired [`SoundNode`] whose master gain sits at 0 and whose sources have
//! not been started. Study them to see how filtered, modulated noise turns
//! into something recognizable.
//!
//! # Example
//!
//! ```ignore
//! use ambiance::{textures, AudioContext};
//!
//! let mut ctx = AudioContext::new(48_000.0, 2.0, None);
//! let mut rain = textures::rain(&mut ctx);
//! rain.gain.set_target(0.3, 0.1);
//! rain.start();
//! ```

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{context::AudioContext, error::UnknownChannel, sound::SoundNode};

mod birds;
mod brown_noise;
mod fireplace;
mod rain;
mod thunder;
mod wind;

pub use birds::birds;
pub use brown_noise::brown_noise;
pub use fireplace::fireplace;
pub use rain::rain;
pub use thunder::thunder;
pub use wind::wind;

/// A texture recipe.
pub type Recipe = fn(&mut AudioContext) -> SoundNode;

/// One named ambiance channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChannelId {
    BrownNoise,
    Rain,
    Fireplace,
    Wind,
    Thunder,
    Birds,
}

impl ChannelId {
    pub const COUNT: usize = 6;

    pub const ALL: [ChannelId; Self::COUNT] = [
        ChannelId::BrownNoise,
        ChannelId::Rain,
        ChannelId::Fireplace,
        ChannelId::Wind,
        ChannelId::Thunder,
        ChannelId::Birds,
    ];

    /// The wire id, e.g. `"brown-noise"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelId::BrownNoise => "brown-noise",
            ChannelId::Rain => "rain",
            ChannelId::Fireplace => "fireplace",
            ChannelId::Wind => "wind",
            ChannelId::Thunder => "thunder",
            ChannelId::Birds => "birds",
        }
    }

    /// Display name shown in the mixer.
    pub fn name(self) -> &'static str {
        match self {
            ChannelId::BrownNoise => "Brown Noise",
            ChannelId::Rain => "Rain",
            ChannelId::Fireplace => "Fireplace",
            ChannelId::Wind => "Wind",
            ChannelId::Thunder => "Thunder",
            ChannelId::Birds => "Birds",
        }
    }

    /// Icon name from the front-end's icon set.
    pub fn icon(self) -> &'static str {
        match self {
            ChannelId::BrownNoise => "Waves",
            ChannelId::Rain => "CloudRain",
            ChannelId::Fireplace => "Flame",
            ChannelId::Wind => "Wind",
            ChannelId::Thunder => "CloudLightning",
            ChannelId::Birds => "Bird",
        }
    }

    /// Position in [`ChannelId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn recipe(self) -> Recipe {
        match self {
            ChannelId::BrownNoise => brown_noise,
            ChannelId::Rain => rain,
            ChannelId::Fireplace => fireplace,
            ChannelId::Wind => wind,
            ChannelId::Thunder => thunder,
            ChannelId::Birds => birds,
        }
    }

    /// Build this channel's texture.
    pub fn build(self, ctx: &mut AudioContext) -> SoundNode {
        (self.recipe())(ctx)
    }
}

impl FromStr for ChannelId {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownChannel(s.to_string()))
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
