//! Spectrum analyzer
//!
//! Log-spaced bands from 20 Hz to Nyquist, each the average power of the
//! FFT bins it covers. Noise textures are broadband, so averaging reads far
//! steadier than sampling single bins. Bands fall back slowly after a peak.

use std::sync::Arc;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

const BANDS: usize = 40;
const FLOOR_DB: f64 = -100.0;
/// Per-update decay toward a quieter reading, in dB
const FALLOFF_DB: f64 = 3.0;

pub struct SpectrumAnalyzer {
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// Half-open FFT bin range per band
    ranges: Vec<(usize, usize)>,
    /// (log10 center frequency, level in dB)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let buffer_len = buffer_len.max(8);
        let fft = FftPlanner::new().plan_fft_forward(buffer_len);

        // Hann
        let denom = (buffer_len - 1) as f32;
        let window = (0..buffer_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();

        let half = buffer_len / 2;
        let bin_hz = f64::from(sample_rate) / buffer_len as f64;
        let min_freq = 20.0f64;
        let max_freq = (f64::from(sample_rate) / 2.0).max(min_freq * 2.0);

        let mut ranges = Vec::with_capacity(BANDS);
        let mut spectrum = Vec::with_capacity(BANDS);
        for band in 0..BANDS {
            let lo = min_freq * (max_freq / min_freq).powf(band as f64 / BANDS as f64);
            let hi = min_freq * (max_freq / min_freq).powf((band + 1) as f64 / BANDS as f64);

            let start = ((lo / bin_hz).floor() as usize).clamp(1, half - 1);
            let end = ((hi / bin_hz).ceil() as usize).clamp(start + 1, half);
            ranges.push((start, end));
            spectrum.push(((lo * hi).sqrt().log10(), FLOOR_DB));
        }

        Self {
            window,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            ranges,
            spectrum,
        }
    }

    /// Analyze the latest `buffer`. Ignored unless it matches the FFT size.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((bin, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *bin = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        for (&(start, end), (_, level)) in self.ranges.iter().zip(self.spectrum.iter_mut()) {
            let bins = &self.scratch[start..end];
            let power = bins.iter().map(|c| c.norm_sqr()).sum::<f32>() / bins.len() as f32;
            let db = (10.0 * f64::from(power.max(1e-12)).log10()).max(FLOOR_DB);

            *level = if db >= *level { db } else { (*level - FALLOFF_DB).max(db) };
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let x_max = spectrum.last().map_or(4.3, |&(x, _)| x);
    let y_max = spectrum
        .iter()
        .map(|&(_, db)| db)
        .fold(FLOOR_DB, f64::max)
        .max(0.0)
        + 10.0;

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([20f64.log10(), x_max])
                .labels(vec!["20", "200", "2k", "20k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, y_max])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
