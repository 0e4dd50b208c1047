//! The channel registry: which channels exist right now, and in what state.

use crate::{engine::timer::TimerHandle, sound::SoundNode, textures::ChannelId};

/// State of a registered channel. A channel with no entry is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Active,
    /// Gain is ramping to 0; `timer` tears the node down when it fires.
    FadingOut { timer: TimerHandle },
}

pub struct ChannelEntry {
    pub node: SoundNode,
    pub state: ChannelState,
}

/// At most one entry per [`ChannelId`].
pub struct Registry {
    entries: [Option<ChannelEntry>; ChannelId::COUNT],
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
        }
    }

    pub fn get(&self, id: ChannelId) -> Option<&ChannelEntry> {
        self.entries[id.index()].as_ref()
    }

    pub fn get_mut(&mut self, id: ChannelId) -> Option<&mut ChannelEntry> {
        self.entries[id.index()].as_mut()
    }

    pub fn contains(&self, id: ChannelId) -> bool {
        self.entries[id.index()].is_some()
    }

    /// Register `entry`, returning whatever it replaced.
    pub fn insert(&mut self, id: ChannelId, entry: ChannelEntry) -> Option<ChannelEntry> {
        self.entries[id.index()].replace(entry)
    }

    pub fn remove(&mut self, id: ChannelId) -> Option<ChannelEntry> {
        self.entries[id.index()].take()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered ids in catalogue order.
    pub fn ids(&self) -> impl Iterator<Item = ChannelId> + '_ {
        ChannelId::ALL
            .into_iter()
            .filter(|&id| self.contains(id))
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut ChannelEntry> {
        self.entries.iter_mut().flatten()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
