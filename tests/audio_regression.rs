use ambiance::{textures, AudioContext, SoundNode, MAX_BLOCK_SIZE};
use rustfft::{num_complex::Complex, FftPlanner};

const SAMPLE_RATE: f32 = 48_000.0;
const FFT_SIZE: usize = 8_192;

/// Render `frames` of a texture at full gain, after a short settle.
fn render_texture(recipe: textures::Recipe, frames: usize) -> Vec<f32> {
    let mut ctx = AudioContext::new(SAMPLE_RATE, 1.0, Some(1234));
    ctx.resume();

    let mut node: SoundNode = recipe(&mut ctx);
    node.gain.set_value(1.0);
    node.start();

    let settle = (SAMPLE_RATE * 0.1) as usize;
    let mut out = vec![0.0f32; settle + frames];
    let render_ctx = ctx.render_ctx();
    for block in out.chunks_mut(MAX_BLOCK_SIZE) {
        node.render(block, &render_ctx);
    }
    out.split_off(settle)
}

/// Power per FFT bin, Hann windowed.
fn power_spectrum(samples: &[f32]) -> Vec<f32> {
    let fft = FftPlanner::new().plan_fft_forward(samples.len());
    let n = samples.len() as f32;
    let mut bins: Vec<Complex<f32>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let w = 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / (n - 1.0)).cos());
            Complex::new(s * w, 0.0)
        })
        .collect();
    fft.process(&mut bins);
    bins[..samples.len() / 2].iter().map(|c| c.norm_sqr()).collect()
}

fn band_energy(spectrum: &[f32], lo_hz: f32, hi_hz: f32) -> f32 {
    let bin_hz = SAMPLE_RATE / FFT_SIZE as f32;
    let lo = (lo_hz / bin_hz) as usize;
    let hi = ((hi_hz / bin_hz) as usize).min(spectrum.len());
    spectrum[lo..hi].iter().sum()
}

#[test]
fn brown_noise_is_weighted_low() {
    let samples = render_texture(textures::brown_noise, FFT_SIZE);
    let spectrum = power_spectrum(&samples);

    let low = band_energy(&spectrum, 20.0, 300.0);
    let high = band_energy(&spectrum, 2_000.0, 20_000.0);
    assert!(low > high * 10.0, "low {low} high {high}");
}

#[test]
fn rain_is_weighted_high() {
    let samples = render_texture(textures::rain, FFT_SIZE);
    let spectrum = power_spectrum(&samples);

    let low = band_energy(&spectrum, 20.0, 1_000.0);
    let high = band_energy(&spectrum, 4_000.0, 20_000.0);
    assert!(high > low * 10.0, "low {low} high {high}");
}

#[test]
fn birds_sing_in_their_register() {
    let samples = render_texture(textures::birds, FFT_SIZE);
    let spectrum = power_spectrum(&samples);

    let register = band_energy(&spectrum, 1_500.0, 6_000.0);
    let total = band_energy(&spectrum, 0.0, 24_000.0);
    assert!(register > total * 0.9, "register {register} total {total}");
}

#[test]
fn textures_stay_in_range() {
    let recipes: [textures::Recipe; 6] = [
        textures::brown_noise,
        textures::rain,
        textures::fireplace,
        textures::wind,
        textures::thunder,
        textures::birds,
    ];

    for recipe in recipes {
        let samples = render_texture(recipe, SAMPLE_RATE as usize);
        assert!(samples.iter().all(|s| s.is_finite()));
        assert!(samples.iter().all(|s| s.abs() < 2.0));
        assert!(samples.iter().any(|s| s.abs() > 0.001));
    }
}
