use anyhow::{Context, ensure};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;

/// What a mouse click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickPolicy {
    /// Launch a rocket from the bottom row that explodes at the clicked row.
    #[default]
    Rocket,
    /// Explode immediately at the clicked cell.
    Burst,
}

/// What happens to particles that drift out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffscreenPolicy {
    /// Dropped the tick they leave the grid.
    #[default]
    Cull,
    /// Kept until their lifetime runs out; the surface clips them.
    Retain,
}

impl std::str::FromStr for ClickPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "rocket" => Ok(ClickPolicy::Rocket),
            "burst" => Ok(ClickPolicy::Burst),
            other => anyhow::bail!("unknown click policy `{other}` (expected rocket or burst)"),
        }
    }
}

impl std::str::FromStr for OffscreenPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "cull" => Ok(OffscreenPolicy::Cull),
            "retain" => Ok(OffscreenPolicy::Retain),
            other => anyhow::bail!("unknown offscreen policy `{other}` (expected cull or retain)"),
        }
    }
}

/// Upper bound on the particles of a single burst.
pub const MAX_PARTICLES_PER_BURST: usize = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub tick_ms: u64,
    pub launch_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 80,
            launch_interval_ms: 1200,
        }
    }
}

impl TimingConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn launch_interval(&self) -> Duration {
        Duration::from_millis(self.launch_interval_ms)
    }
}

/// Tunables of the particle simulation. Units are cells and ticks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Inclusive bounds of the particle count of one burst.
    pub min_particles: usize,
    pub max_particles: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Vertical velocity scale; terminal cells are about twice as tall as wide.
    pub vertical_spread: f32,
    /// Inclusive bounds of a particle's lifetime.
    pub min_lifetime: i32,
    pub max_lifetime: i32,
    pub max_burst_age: u32,
    /// An empty burst is only retired once it is older than this.
    pub burst_grace: u32,
    pub glyphs: Vec<char>,
    pub offscreen: OffscreenPolicy,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            min_particles: 20,
            max_particles: 49,
            min_speed: 1.0,
            max_speed: 3.0,
            vertical_spread: 0.5,
            min_lifetime: 10,
            max_lifetime: 29,
            max_burst_age: 60,
            burst_grace: 10,
            glyphs: vec!['*', '+', 'o', 'x', '.'],
            offscreen: OffscreenPolicy::Cull,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FireworksConfig {
    pub click: ClickPolicy,
    #[serde(deserialize_with = "deserialize_hex_color")]
    pub background: Option<(u8, u8, u8)>,
    pub timing: TimingConfig,
    pub physics: PhysicsConfig,
}

impl FireworksConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let p = &self.physics;
        ensure!(self.timing.tick_ms > 0, "timing.tick_ms must be positive");
        ensure!(
            self.timing.launch_interval_ms > 0,
            "timing.launch_interval_ms must be positive"
        );
        ensure!(
            p.min_particles <= p.max_particles,
            "physics.min_particles ({}) exceeds physics.max_particles ({})",
            p.min_particles,
            p.max_particles
        );
        ensure!(
            p.max_particles <= MAX_PARTICLES_PER_BURST,
            "physics.max_particles ({}) exceeds {MAX_PARTICLES_PER_BURST}",
            p.max_particles
        );
        for (name, value) in [
            ("gravity", p.gravity),
            ("min_speed", p.min_speed),
            ("max_speed", p.max_speed),
            ("vertical_spread", p.vertical_spread),
        ] {
            ensure!(value.is_finite(), "physics.{name} must be finite, got {value}");
        }
        ensure!(
            0.0 <= p.min_speed && p.min_speed <= p.max_speed,
            "physics speed range [{}, {}) is invalid",
            p.min_speed,
            p.max_speed
        );
        ensure!(
            0 < p.min_lifetime && p.min_lifetime <= p.max_lifetime,
            "physics lifetime range [{}, {}] is invalid",
            p.min_lifetime,
            p.max_lifetime
        );
        ensure!(p.max_burst_age > 0, "physics.max_burst_age must be positive");
        ensure!(!p.glyphs.is_empty(), "physics.glyphs must not be empty");
        if let Some(glyph) = p.glyphs.iter().find(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("physics.glyphs contains a non-visible character {glyph:?}");
        }
        Ok(())
    }
}

pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

fn deserialize_hex_color<'de, D>(deserializer: D) -> Result<Option<(u8, u8, u8)>, D::Error>
where
    D: Deserializer<'de>,
{
    let hex: Option<String> = Option::deserialize(deserializer)?;
    match hex {
        None => Ok(None),
        Some(hex) => parse_hex_color(&hex).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid hex color `{hex}`, expected RRGGBB"))
        }),
    }
}
