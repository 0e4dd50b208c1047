//! ambiance - terminal mixer for procedural ambient sound
//!
//! Run with: cargo run --release
//!
//! Mixer state is read from and saved to `$AMBIANCE_STATE`
//! (default `ambiance.json`). Logs go to `ambiance.log`; set `RUST_LOG`
//! to change the filter.

mod app;
mod ui;

use std::{fs::File, path::PathBuf, sync::Mutex};

use ambiance::mixer::MixerState;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::Ambiance;

const DEFAULT_STATE_PATH: &str = "ambiance.json";
const LOG_PATH: &str = "ambiance.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let state_path = std::env::var_os("AMBIANCE_STATE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH));

    let mixer = match MixerState::load(&state_path) {
        Ok(mixer) => mixer,
        Err(err) => {
            warn!(path = %state_path.display(), %err, "unreadable mixer state, using defaults");
            MixerState::default()
        }
    };
    info!(path = %state_path.display(), active = mixer.active_count(), "mixer state loaded");

    Ambiance::new(mixer, state_path).run()
}

/// Log to a file: the terminal belongs to the UI.
fn init_logging() -> EyreResult<()> {
    let file = File::create(LOG_PATH).wrap_err_with(|| format!("failed to create {LOG_PATH}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ambiance=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
