//! Terminal mixer UI
//!
//! One row per channel with a volume bar, plus a live waveform and
//! spectrum of what the engine is producing.

mod channels;
mod spectrum;
mod status;
mod waveform;

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use ambiance::{io::scope::ScopeReader, mixer::MixerState, ChannelId, ChannelState, Engine};
use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use tracing::{debug, warn};

use channels::render_channels;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Samples kept for the scope and the FFT
pub const VIS_BUFFER_SIZE: usize = 1024;

/// Slider step for the arrow keys
const VOLUME_STEP: f32 = 0.05;

pub struct UiApp {
    engine: Arc<Mutex<Engine>>,
    mixer: MixerState,
    state_path: PathBuf,
    scope: ScopeReader,
    spectrum: SpectrumAnalyzer,
    sample_rate: f32,
    selected: usize,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        engine: Arc<Mutex<Engine>>,
        mixer: MixerState,
        state_path: PathBuf,
        scope: ScopeReader,
        sample_rate: f32,
    ) -> Self {
        Self {
            engine,
            mixer,
            state_path,
            scope,
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            sample_rate,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            if self.scope.poll() > 0 {
                self.spectrum.update(self.scope.window());
            }

            terminal.draw(|frame| self.render(frame))?;

            // ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn selected_id(&self) -> ChannelId {
        self.mixer
            .channels
            .get(self.selected)
            .map_or(ChannelId::BrownNoise, |c| c.id)
    }

    fn handle_key(&mut self, key: KeyCode) {
        let id = self.selected_id();
        let volume = self.mixer.channel(id).map_or(0.0, |c| c.volume);

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                return;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.mixer.channels.len().saturating_sub(1));
                return;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.mixer.toggle(id),
            KeyCode::Left | KeyCode::Char('h') => self.mixer.set_volume(id, volume - VOLUME_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.mixer.set_volume(id, volume + VOLUME_STEP),
            KeyCode::Char('m') | KeyCode::Char('M') => self.mixer.stop_all(),
            _ => return,
        }

        self.apply();
    }

    /// Push the mixer into the engine and persist it.
    fn apply(&mut self) {
        match self.engine.lock() {
            Ok(mut engine) => self.mixer.sync(&mut engine),
            Err(_) => warn!("engine lock poisoned, change not applied"),
        }

        if let Err(err) = self.mixer.save(&self.state_path) {
            warn!(path = %self.state_path.display(), %err, "failed to save mixer state");
        } else {
            debug!(path = %self.state_path.display(), "mixer state saved");
        }
    }

    fn engine_states(&self) -> [Option<ChannelState>; ChannelId::COUNT] {
        match self.engine.lock() {
            Ok(engine) => ChannelId::ALL.map(|id| engine.channel_state(id)),
            Err(_) => [None; ChannelId::COUNT],
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                // Status bar
                Constraint::Length(ChannelId::COUNT as u16 + 2),      // Channels
                Constraint::Min(8),                                   // Scope + spectrum
                Constraint::Length(1),                                // Help bar
            ])
            .split(frame.area());

        let stats = AudioStats::from_buffer(self.scope.window());
        render_status(frame, chunks[0], self.mixer.active_count(), self.sample_rate, &stats);

        render_channels(frame, chunks[1], &self.mixer, self.selected, &self.engine_states());

        let scopes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        render_waveform(frame, scopes[0], self.scope.window());
        render_spectrum(frame, scopes[1], self.spectrum.data());

        let help = Paragraph::new(
            " [↑↓] Select  [Space] Toggle  [←→] Volume  [M] Mute All  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
