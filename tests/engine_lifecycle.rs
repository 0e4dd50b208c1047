use ambiance::{ChannelId, ChannelState, Engine, EngineConfig};

fn engine() -> Engine {
    Engine::new(EngineConfig {
        noise_seconds: 0.25,
        seed: Some(42),
        ..EngineConfig::default()
    })
}

fn render(engine: &mut Engine, seconds: f32) -> Vec<f32> {
    let frames = (seconds * engine.config().sample_rate).round() as usize;
    let mut out = vec![0.0f32; frames];
    engine.render(&mut out);
    out
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
}

#[test]
fn every_channel_starts_and_releases() {
    for id in ChannelId::ALL {
        let mut engine = engine();
        engine.start_sound(id.as_str(), 0.5);
        assert!(engine.is_playing(id.as_str()), "{id} should be playing");

        render(&mut engine, 0.2);
        engine.stop_sound(id.as_str());
        assert!(engine.is_playing(id.as_str()), "{id} is still fading");

        render(&mut engine, 0.4);
        assert!(!engine.is_playing(id.as_str()), "{id} should be released");
        assert_eq!(engine.active_count(), 0);
    }
}

#[test]
fn set_volume_never_starts_a_channel() {
    let mut engine = engine();
    engine.set_volume("rain", 0.5);

    assert!(!engine.is_playing("rain"));
    assert_eq!(engine.instantiations(), 0);
    assert!(engine.context().is_none());
}

#[test]
fn double_stop_is_harmless() {
    let mut engine = engine();
    engine.start_sound("wind", 0.4);
    engine.stop_sound("wind");
    engine.stop_sound("wind");
    assert_eq!(engine.pending_timers(), 1);

    render(&mut engine, 0.4);
    engine.stop_sound("wind");
    assert!(!engine.is_playing("wind"));
    assert_eq!(engine.pending_timers(), 0);
}

#[test]
fn volumes_are_clamped() {
    let mut engine = engine();
    engine.start_sound("rain", 1.5);
    assert_eq!(engine.gain_target(ChannelId::Rain), Some(1.0));

    engine.set_volume("rain", -1.0);
    assert_eq!(engine.gain_target(ChannelId::Rain), Some(0.0));
    assert_eq!(engine.channel_state(ChannelId::Rain), Some(ChannelState::Active));

    engine.set_volume("rain", f32::NAN);
    assert_eq!(engine.gain_target(ChannelId::Rain), Some(0.0));
}

#[test]
fn stop_all_empties_the_registry() {
    let mut engine = engine();
    engine.start_sound("rain", 0.3);
    engine.start_sound("birds", 0.3);
    engine.start_sound("thunder", 0.3);
    render(&mut engine, 0.1);

    engine.stop_all();
    assert_eq!(engine.active_count(), 3);
    assert!(ChannelId::ALL
        .into_iter()
        .filter_map(|id| engine.channel_state(id))
        .all(|state| matches!(state, ChannelState::FadingOut { .. })));

    render(&mut engine, 0.4);
    assert_eq!(engine.active_count(), 0);
    assert!(peak(&render(&mut engine, 0.05)) == 0.0);
}

#[test]
fn stop_all_releases_every_channel() {
    let mut engine = engine();
    for id in ChannelId::ALL {
        engine.start_sound(id.as_str(), 0.5);
    }
    assert_eq!(engine.active_count(), ChannelId::COUNT);
    render(&mut engine, 0.1);

    engine.stop_all();
    render(&mut engine, 0.5);

    assert_eq!(engine.active_count(), 0);
    assert_eq!(engine.pending_timers(), 0);
    for id in ChannelId::ALL {
        assert!(!engine.is_playing(id.as_str()), "{id} should be released");
    }
}

#[test]
fn restart_before_release_keeps_the_channel() {
    let mut engine = engine();
    engine.start_sound("rain", 0.5);
    render(&mut engine, 0.1);

    engine.stop_sound("rain");
    render(&mut engine, 0.1);
    engine.start_sound("rain", 0.8);

    // Well past the original release deadline
    render(&mut engine, 0.5);

    assert!(engine.is_playing("rain"));
    assert_eq!(engine.channel_state(ChannelId::Rain), Some(ChannelState::Active));
    assert_eq!(engine.gain_target(ChannelId::Rain), Some(0.8));
    let gain = engine.gain(ChannelId::Rain).unwrap_or_default();
    assert!((gain - 0.8).abs() < 1e-3, "gain {gain}");
    assert_eq!(engine.instantiations(), 1);
}

#[test]
fn restart_after_release_builds_a_new_node() {
    let mut engine = engine();
    engine.start_sound("fireplace", 0.5);
    engine.stop_sound("fireplace");
    render(&mut engine, 0.4);

    engine.start_sound("fireplace", 0.5);
    assert!(engine.is_playing("fireplace"));
    assert_eq!(engine.instantiations(), 2);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut engine = engine();
    engine.start_sound("ocean", 0.5);
    engine.set_volume("ocean", 0.5);
    engine.stop_sound("ocean");

    assert!(!engine.is_playing("ocean"));
    assert!(!engine.is_playing("Rain"));
    assert!(engine.context().is_none());
    assert_eq!(engine.instantiations(), 0);
}

#[test]
fn channels_are_independent() {
    let mut engine = engine();
    engine.start_sound("rain", 0.5);
    engine.start_sound("fireplace", 0.3);
    render(&mut engine, 0.3);

    engine.stop_sound("rain");
    render(&mut engine, 0.4);

    assert!(!engine.is_playing("rain"));
    assert!(engine.is_playing("fireplace"));
    let gain = engine.gain(ChannelId::Fireplace).unwrap_or_default();
    assert!((gain - 0.3).abs() < 1e-3, "gain {gain}");

    engine.set_volume("fireplace", 0.6);
    assert_eq!(engine.gain_target(ChannelId::Fireplace), Some(0.6));
    assert!(!engine.is_playing("rain"));
}

#[test]
fn fades_in_from_silence() {
    let mut engine = engine();
    engine.start_sound("brown-noise", 1.0);

    let first = render(&mut engine, 64.0 / 48_000.0);
    assert!(peak(&first) < 0.05, "attack should start near silence");

    render(&mut engine, 0.5);
    assert!(engine.gain(ChannelId::BrownNoise).unwrap_or_default() > 0.99);
}

#[test]
fn fades_out_smoothly() {
    let mut engine = engine();
    engine.start_sound("brown-noise", 1.0);
    render(&mut engine, 0.5);
    engine.stop_sound("brown-noise");

    let mut last = engine.gain(ChannelId::BrownNoise).unwrap_or_default();
    for _ in 0..23 {
        render(&mut engine, 512.0 / 48_000.0);
        let gain = engine.gain(ChannelId::BrownNoise).unwrap_or_default();
        assert!(gain <= last);
        last = gain;
    }

    // ~0.245s after stop, still registered and nearly silent
    assert!(engine.is_playing("brown-noise"));
    assert!(last < 0.06, "gain {last}");
}

#[test]
fn seeded_engines_render_identically() {
    let mut a = engine();
    let mut b = engine();
    for engine in [&mut a, &mut b] {
        engine.start_sound("birds", 0.5);
        engine.start_sound("wind", 0.5);
    }

    assert_eq!(render(&mut a, 0.25), render(&mut b, 0.25));
}

#[test]
fn changing_one_channel_leaves_another_alone() {
    let mut engine = engine();
    engine.start_sound("rain", 0.3);
    engine.start_sound("fireplace", 0.6);
    render(&mut engine, 0.7);

    let before = engine.gain(ChannelId::Fireplace).unwrap_or_default();
    assert!((before - 0.6).abs() < 1e-3, "gain {before}");

    engine.set_volume("rain", 0.9);
    assert_eq!(engine.gain_target(ChannelId::Rain), Some(0.9));
    assert_eq!(engine.gain_target(ChannelId::Fireplace), Some(0.6));

    render(&mut engine, 0.3);
    let after = engine.gain(ChannelId::Fireplace).unwrap_or_default();
    assert!((after - 0.6).abs() < 1e-3, "gain {after}");

    engine.stop_sound("rain");
    render(&mut engine, 0.4);

    assert!(!engine.is_playing("rain"));
    assert_eq!(
        engine.channel_state(ChannelId::Fireplace),
        Some(ChannelState::Active)
    );
    assert_eq!(engine.gain_target(ChannelId::Fireplace), Some(0.6));
}
