//! Integration tests for phasis-config.
//!
//! These tests verify file round trips and the config-to-effect path.

use phasis_config::{ConfigError, PhaserConfig, ValidationError};
use phasis_core::Effect;
use phasis_effects::StereoPhaser;
use tempfile::TempDir;

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phaser.toml");

    let config = PhaserConfig {
        rate: 1.5,
        depth: 0.5,
        stages: 4,
        negative_resonance: true,
        ..Default::default()
    };
    config.save(&path).unwrap();

    let loaded = PhaserConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = PhaserConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { ref path, .. } if path.ends_with("missing.toml")));
}

#[test]
fn test_save_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/phaser.toml");

    let err = PhaserConfig::default().save(&path).unwrap_err();
    assert!(matches!(err, ConfigError::WriteFile { .. }));
}

#[test]
fn test_load_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "rate = = 3").unwrap();

    assert!(matches!(
        PhaserConfig::load(&path),
        Err(ConfigError::TomlParse(_))
    ));
}

#[test]
fn test_validation_error_wraps_into_config_error() {
    let config = PhaserConfig {
        depth: -1.0,
        ..Default::default()
    };
    let err: ConfigError = config.validate().unwrap_err().into();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::OutOfRange { .. })
    ));
}

#[test]
fn test_config_drives_identical_output() {
    let config = PhaserConfig::from_toml_str(
        r#"
        rate = 2.0
        feedback = -0.7
        stages = 10
        lfo_phase_offset = 0.25
        "#,
    )
    .unwrap();

    let mut a = StereoPhaser::new(44100.0);
    config.apply(&mut a);

    // Capture and re-apply onto a second instance
    let captured = PhaserConfig::from_phaser(&a);
    let mut b = StereoPhaser::new(44100.0);
    captured.apply(&mut b);

    for n in 0..4096 {
        let x = test_signal(n);
        assert_eq!(a.process_stereo(x, x), b.process_stereo(x, x));
    }
}

#[test]
fn test_from_phaser_reflects_clamping() {
    let mut phaser = StereoPhaser::new(44100.0);
    phaser.set_rate(0.0);
    phaser.set_coeff_range(0.99, 0.99);

    let captured = PhaserConfig::from_phaser(&phaser);
    assert_eq!(captured.rate, 0.01);
    assert_eq!(captured.coeff_min, 0.99);
    assert!(captured.coeff_max > 0.99);
}

fn test_signal(n: usize) -> f32 {
    (n as f32 * 0.031).sin() * 0.5
}
