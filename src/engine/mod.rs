//! The engine facade.
//!
//! Everything a front-end needs: start a channel at a volume, change its
//! volume, stop it, stop everything, ask whether it is playing. Every
//! change is a smooth ramp on the channel's master gain, so nothing clicks.
//!
//! ```text
//!              start_sound                 stop_sound
//!   Inactive ───────────────▶ Active ─────────────────▶ FadingOut
//!       ▲                       ▲                          │
//!       │                       │  start_sound/set_volume  │
//!       │                       └──────────────────────────┤
//!       │               release timer fires                │
//!       └──────────────────────────────────────────────────┘
//! ```
//!
//! Stopping is two-phase: the gain ramps toward 0, and a one-shot timer
//! `release_delay` later stops the sources and drops the node. Calling
//! `start_sound` or `set_volume` before the timer fires cancels it and
//! reuses the existing node.
//!
//! Unknown channel ids are ignored. Volumes are clamped to [0, 1].

mod registry;
mod timer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use registry::{ChannelEntry, ChannelState, Registry};
pub use timer::{TimerHandle, Timers};

use crate::{context::AudioContext, textures::ChannelId, MAX_BLOCK_SIZE};

/// Engine tuning. All times are in seconds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f32,
    /// Length of each generated noise buffer.
    pub noise_seconds: f32,
    /// Fade-in of a newly started channel.
    pub attack_time_constant: f32,
    /// Ramp for volume changes on a live channel.
    pub volume_time_constant: f32,
    /// Fade-out on stop.
    pub release_time_constant: f32,
    /// Delay between `stop_sound` and tearing the node down.
    pub release_delay: f32,
    /// Seed for noise and randomized recipe parameters. `None` = entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            noise_seconds: 2.0,
            attack_time_constant: 0.1,
            volume_time_constant: 0.05,
            release_time_constant: 0.08,
            release_delay: 0.3,
            seed: None,
        }
    }
}

/// Clamp to [0, 1]; NaN becomes silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

pub struct Engine {
    config: EngineConfig,
    context: Option<AudioContext>,
    registry: Registry,
    timers: Timers<ChannelId>,
    scratch: Vec<f32>,
    instantiations: usize,
}

impl Engine {
    /// The context is not created until the first sound starts.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            context: None,
            registry: Registry::new(),
            timers: Timers::new(),
            scratch: vec![0.0; MAX_BLOCK_SIZE],
            instantiations: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start `id` at `volume`, or ramp an existing channel to it.
    pub fn start_sound(&mut self, id: &str, volume: f32) {
        if let Some(id) = resolve(id) {
            self.start_channel(id, volume);
        }
    }

    /// Fade `id` out and tear it down after the release delay.
    pub fn stop_sound(&mut self, id: &str) {
        if let Some(id) = resolve(id) {
            self.stop_channel(id);
        }
    }

    /// Ramp a playing channel to `volume`. Never starts anything.
    pub fn set_volume(&mut self, id: &str, volume: f32) {
        if let Some(id) = resolve(id) {
            self.set_channel_volume(id, volume);
        }
    }

    pub fn stop_all(&mut self) {
        for id in ChannelId::ALL {
            self.stop_channel(id);
        }
    }

    /// True while a channel is registered, including during its fade-out.
    pub fn is_playing(&self, id: &str) -> bool {
        resolve(id).is_some_and(|id| self.registry.contains(id))
    }

    pub fn start_channel(&mut self, id: ChannelId, volume: f32) {
        let volume = clamp_volume(volume);

        if let Some(entry) = self.registry.get_mut(id) {
            if let ChannelState::FadingOut { timer } = entry.state {
                self.timers.cancel(timer);
                debug!(channel = %id, "fade-out cancelled");
            }
            entry.state = ChannelState::Active;
            entry
                .node
                .gain
                .set_target(volume, self.config.volume_time_constant);
            debug!(channel = %id, volume, "channel retargeted");
            return;
        }

        let config = &self.config;
        let ctx = self.context.get_or_insert_with(|| {
            info!(
                sample_rate = config.sample_rate,
                seed = ?config.seed,
                "audio context created"
            );
            AudioContext::new(config.sample_rate, config.noise_seconds, config.seed)
        });
        ctx.resume();

        let mut node = id.build(ctx);
        node.gain.set_target(volume, config.attack_time_constant);
        node.start();
        self.instantiations += 1;

        debug!(channel = %id, volume, sources = node.source_count(), "channel started");
        self.registry.insert(
            id,
            ChannelEntry {
                node,
                state: ChannelState::Active,
            },
        );
    }

    pub fn stop_channel(&mut self, id: ChannelId) {
        let Some(entry) = self.registry.get_mut(id) else {
            return;
        };
        if entry.state != ChannelState::Active {
            return;
        }

        let now = self.context.as_ref().map_or(0.0, |ctx| ctx.current_time());
        let deadline = now + f64::from(self.config.release_delay);
        let timer = self.timers.schedule(deadline, id);

        entry
            .node
            .gain
            .set_target(0.0, self.config.release_time_constant);
        entry.state = ChannelState::FadingOut { timer };
        debug!(channel = %id, deadline, "channel fading out");
    }

    pub fn set_channel_volume(&mut self, id: ChannelId, volume: f32) {
        if self.registry.contains(id) {
            self.start_channel(id, volume);
        }
    }

    /// Render the mix of every registered channel into `out`.
    ///
    /// Silence, with the clock frozen, until the first sound starts.
    pub fn render(&mut self, out: &mut [f32]) {
        out.fill(0.0);

        let Some(ctx) = self.context.as_mut() else {
            return;
        };
        if !ctx.is_running() {
            return;
        }

        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let render_ctx = ctx.render_ctx();
            let scratch = &mut self.scratch[..chunk.len()];

            for entry in self.registry.entries_mut() {
                entry.node.render(scratch, &render_ctx);
                for (sample, voice) in chunk.iter_mut().zip(scratch.iter()) {
                    *sample += *voice;
                }
            }

            ctx.advance(chunk.len());

            let now = ctx.current_time();
            while let Some((handle, id)) = self.timers.pop_due(now) {
                let owned = matches!(
                    self.registry.get(id).map(|entry| entry.state),
                    Some(ChannelState::FadingOut { timer }) if timer == handle
                );
                if !owned {
                    continue;
                }
                if let Some(mut entry) = self.registry.remove(id) {
                    entry.node.stop();
                    debug!(channel = %id, time = now, "channel released");
                }
            }
        }
    }

    pub fn channel_state(&self, id: ChannelId) -> Option<ChannelState> {
        self.registry.get(id).map(|entry| entry.state)
    }

    /// Current (smoothed) master gain of a registered channel.
    pub fn gain(&self, id: ChannelId) -> Option<f32> {
        self.registry.get(id).map(|entry| entry.node.gain.value())
    }

    /// Where the master gain is heading.
    pub fn gain_target(&self, id: ChannelId) -> Option<f32> {
        self.registry.get(id).map(|entry| entry.node.gain.target())
    }

    /// Registered channels, fading ones included.
    pub fn active_count(&self) -> usize {
        self.registry.len()
    }

    pub fn active_channels(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.registry.ids()
    }

    /// How many sound nodes have been built over the engine's life.
    pub fn instantiations(&self) -> usize {
        self.instantiations
    }

    /// Pending fade-out timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn context(&self) -> Option<&AudioContext> {
        self.context.as_ref()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn resolve(id: &str) -> Option<ChannelId> {
    match id.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(%err, "ignoring request");
            None
        }
    }
}
