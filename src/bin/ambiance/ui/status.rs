//! Status bar - active channel count and output level

use ambiance::ChannelId;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, active: usize, sample_rate: f32, stats: &AudioStats) {
    let block = Block::default().title(" Ambiance ").borders(Borders::ALL);

    let (symbol, color) = if active > 0 {
        ("▶", Color::Green)
    } else {
        ("■", Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {symbol} {active} of {} channels active  ", ChannelId::COUNT),
            Style::default().fg(color),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
