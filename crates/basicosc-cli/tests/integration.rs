//! Integration tests for the `basicosc` binary.

use std::process::Command;

fn basicosc_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_basicosc"))
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_writes_stereo_float_wav() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tone.wav");

    let output = basicosc_bin()
        .args(["render", out.to_str().unwrap(), "--duration", "0.5"])
        .args(["--sample-rate", "48000", "--block-size", "300"])
        .output()
        .expect("failed to run basicosc render");
    assert!(
        output.status.success(),
        "render failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let reader = hound::WavReader::open(&out).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(spec.bits_per_sample, 32);
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);

    let samples: Vec<f32> = reader.into_samples::<f32>().map(Result::unwrap).collect();
    assert_eq!(samples.len(), 24000 * 2);

    // Both oscillators start at zero phase, summed and scaled by 0.1
    assert_eq!(samples[0], 0.0);
    let peak = samples.iter().fold(0.0_f32, |m, s| m.max(s.abs()));
    assert!(peak > 0.1 && peak <= 0.2, "peak {peak}");

    for frame in samples.chunks_exact(2) {
        assert_eq!(frame[0], frame[1]);
    }
}

#[test]
fn render_mono_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("chain.toml");
    let out = dir.path().join("mono.wav");
    std::fs::write(
        &config,
        "composition = \"replace\"\n[osc_b]\nfrequency_hz = 1000.0\n[gain]\nlinear = 0.5\n",
    )
    .unwrap();

    let status = basicosc_bin()
        .args(["render", out.to_str().unwrap(), "--channels", "1"])
        .args(["--duration", "0.01", "--sample-rate", "48000"])
        .args(["--config", config.to_str().unwrap()])
        .status()
        .expect("failed to run basicosc render");
    assert!(status.success());

    let reader = hound::WavReader::open(&out).unwrap();
    assert_eq!(reader.spec().channels, 1);
    let samples: Vec<f32> = reader.into_samples::<f32>().map(Result::unwrap).collect();
    assert_eq!(samples.len(), 480);

    // Replace leaves only oscillator B: 1 kHz at 48 kHz peaks on sample 12
    assert!((samples[12] - 0.5).abs() < 1e-5, "got {}", samples[12]);
}

#[test]
fn render_rejects_three_channels() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bad.wav");
    let status = basicosc_bin()
        .args(["render", out.to_str().unwrap(), "--channels", "3"])
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!out.exists());
}

#[test]
fn render_rejects_zero_block_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bad.wav");
    let output = basicosc_bin()
        .args(["render", out.to_str().unwrap(), "--block-size", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// config / check
// ---------------------------------------------------------------------------

#[test]
fn config_prints_default_toml() {
    let output = basicosc_bin().arg("config").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in [
        "composition = \"additive\"",
        "[osc_a]",
        "frequency_hz = 155.563",
        "[osc_b]",
        "frequency_hz = 233.082",
        "[gain]",
        "linear = 0.1",
    ] {
        assert!(stdout.contains(expected), "missing '{expected}' in:\n{stdout}");
    }
}

#[test]
fn config_output_then_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.toml");

    let status = basicosc_bin()
        .args(["config", "--output", path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(path.exists());

    let output = basicosc_bin()
        .args(["check", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ok"));
}

#[test]
fn check_rejects_invalid_frequency() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[osc_a]\nfrequency_hz = -5.0\n").unwrap();

    let output = basicosc_bin()
        .args(["check", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");
    assert_eq!(
        stderr.matches("invalid frequency -5 Hz").count(),
        1,
        "cause should be reported once: {stderr}"
    );
}

#[test]
fn check_rejects_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typo.toml");
    std::fs::write(&path, "[gain]\nlinaer = 0.5\n").unwrap();

    let status = basicosc_bin()
        .args(["check", path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(!status.success());
}

// ---------------------------------------------------------------------------
// info
// ---------------------------------------------------------------------------

#[test]
fn info_shows_metadata() {
    let output = basicosc_bin().arg("info").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BasicOsc"));
    assert!(stdout.contains("stereo in, stereo out"));
    assert!(stdout.contains("155.563 Hz"));
    assert!(stdout.contains("additive"));
    assert!(stdout.contains("MIDI:        none"));
    assert!(stdout.contains("Gain:        0.1 (-20.0 dB)"), "{stdout}");
}
