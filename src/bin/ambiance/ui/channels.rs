//! Channel list - one row per texture with a volume bar

use ambiance::{
    mixer::{MixerState, SoundChannel},
    ChannelId, ChannelState,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BAR_WIDTH: usize = 24;

fn glyph(icon: &str) -> &'static str {
    match icon {
        "Waves" => "≈",
        "CloudRain" => "☂",
        "Flame" => "♨",
        "Wind" => "∿",
        "CloudLightning" => "ϟ",
        "Bird" => "♪",
        _ => "·",
    }
}

fn row(channel: &SoundChannel, selected: bool, state: Option<ChannelState>) -> Line<'static> {
    let filled = (channel.volume * BAR_WIDTH as f32).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    let accent = if channel.is_playing { Color::Magenta } else { Color::DarkGray };
    let name_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else if channel.is_playing {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let engine_label = match state {
        Some(ChannelState::Active) => "playing",
        Some(ChannelState::FadingOut { .. }) => "fading",
        None => "",
    };

    Line::from(vec![
        Span::raw(if selected { " ▸ " } else { "   " }),
        Span::styled(format!("{} ", glyph(&channel.icon)), Style::default().fg(accent)),
        Span::styled(format!("{:<12}", channel.name), name_style),
        Span::styled(bar, Style::default().fg(accent)),
        Span::styled(
            format!(" {:>3}%  ", (channel.volume * 100.0).round() as u32),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(engine_label, Style::default().fg(Color::DarkGray)),
    ])
}

pub fn render_channels(
    frame: &mut Frame,
    area: Rect,
    mixer: &MixerState,
    selected: usize,
    states: &[Option<ChannelState>; ChannelId::COUNT],
) {
    let block = Block::default().title(" Channels ").borders(Borders::ALL);

    let lines: Vec<Line> = mixer
        .channels
        .iter()
        .enumerate()
        .map(|(i, channel)| row(channel, i == selected, states[channel.id.index()]))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
