//! Audio device setup and the render callback.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use ambiance::{
    io::{scope::scope, write_interleaved},
    mixer::MixerState,
    Engine, MAX_BLOCK_SIZE,
};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tracing::{error, info};

use crate::ui::{UiApp, VIS_BUFFER_SIZE};

/// Ring capacity between the callback and the UI: a few frames' worth.
const SCOPE_CAPACITY: usize = 16_384;

pub struct Ambiance {
    mixer: MixerState,
    state_path: PathBuf,
}

impl Ambiance {
    pub fn new(mixer: MixerState, state_path: PathBuf) -> Self {
        Self { mixer, state_path }
    }

    /// Open the default output device, start the stream and hand the
    /// terminal to the UI until it quits.
    pub fn run(mut self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        info!(sample_rate, channels, "output device opened");

        // The device decides the rate, whatever the saved state says
        self.mixer.engine.sample_rate = sample_rate;
        let mut engine = Engine::new(self.mixer.engine.clone());
        self.mixer.sync(&mut engine);
        let engine = Arc::new(Mutex::new(engine));

        let (mut tap, reader) = scope(SCOPE_CAPACITY, VIS_BUFFER_SIZE);

        let callback_engine = Arc::clone(&engine);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    let Ok(mut engine) = callback_engine.lock() else {
                        data.fill(0.0);
                        return;
                    };

                    let total_frames = data.len() / channels.max(1);
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames];
                        engine.render(block);

                        let offset = frames_written * channels;
                        write_interleaved(block, &mut data[offset..], channels);
                        tap.push(block);

                        frames_written += frames;
                    }
                },
                |err| error!(%err, "audio stream error"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(engine, self.mixer, self.state_path, reader, sample_rate)
            .run(&mut terminal);
        ratatui::restore();

        drop(stream);
        info!("shut down");
        result
    }
}
