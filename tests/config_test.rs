use std::io::Write;
use std::time::Duration;

use termfireworks::config::MAX_PARTICLES_PER_BURST;
use termfireworks::{ClickPolicy, FireworksConfig, OffscreenPolicy};

#[test]
fn test_defaults() {
    let config = FireworksConfig::default();
    config.validate().unwrap();

    assert_eq!(config.click, ClickPolicy::Rocket);
    assert_eq!(config.background, None);
    assert_eq!(config.timing.tick(), Duration::from_millis(80));
    assert_eq!(config.timing.launch_interval(), Duration::from_millis(1200));
    assert_eq!(config.physics.gravity, 0.1);
    assert_eq!(config.physics.max_burst_age, 60);
    assert_eq!(config.physics.offscreen, OffscreenPolicy::Cull);
    assert_eq!(config.physics.glyphs, vec!['*', '+', 'o', 'x', '.']);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = FireworksConfig::from_toml(
        r##"
        click = "burst"
        background = "1a1b26"

        [physics]
        gravity = 0.05
        glyphs = ["@", "#"]
        offscreen = "retain"
        "##,
    )
    .unwrap();

    assert_eq!(config.click, ClickPolicy::Burst);
    assert_eq!(config.background, Some((0x1a, 0x1b, 0x26)));
    assert_eq!(config.physics.gravity, 0.05);
    assert_eq!(config.physics.glyphs, vec!['@', '#']);
    assert_eq!(config.physics.offscreen, OffscreenPolicy::Retain);
    assert_eq!(config.physics.min_particles, 20);
    assert_eq!(config.timing.tick_ms, 80);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[timing]\ntick_ms = 40\nlaunch_interval_ms = 500").unwrap();

    let config = FireworksConfig::from_file(file.path()).unwrap();
    assert_eq!(config.timing.tick(), Duration::from_millis(40));
    assert_eq!(config.timing.launch_interval(), Duration::from_millis(500));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FireworksConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("cannot read config file"));
}

#[test]
fn test_invalid_values_are_rejected() {
    for text in [
        "background = \"nothex\"",
        "click = \"sideways\"",
        "[timing]\ntick_ms = 0",
        "[physics]\nmin_particles = 50\nmax_particles = 10",
        "[physics]\nmin_lifetime = 0",
        "[physics]\nmin_speed = 4.0",
        "[physics]\nglyphs = []",
        "[physics]\nglyphs = [\" \"]",
        "[physics]\nglyphs = [\"ab\"]",
        "[physics]\nmin_particles = 1000000000000\nmax_particles = 1000000000000",
        "[physics]\nmax_particles = 10001",
        "[physics]\ngravity = nan",
        "[physics]\nvertical_spread = inf",
        "[physics]\nmax_speed = inf",
        "[physics]\nmin_speed = -inf",
    ] {
        assert!(
            FireworksConfig::from_toml(text).is_err(),
            "accepted invalid config: {text}"
        );
    }
}

#[test]
fn test_particle_ceiling_is_inclusive() {
    let config = FireworksConfig::from_toml(
        "[physics]\nmin_particles = 10000\nmax_particles = 10000",
    )
    .unwrap();
    assert_eq!(config.physics.max_particles, MAX_PARTICLES_PER_BURST);
}
