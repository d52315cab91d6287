//! Rockets, bursts and the tick that advances them.
//!
//! Nothing in here knows about the terminal: the driver reads positions out
//! of [`Simulation::rockets`] and [`Simulation::bursts`] after each
//! [`Simulation::advance`] and draws them.

pub mod burst;
pub mod color;
pub mod particle;
pub mod rocket;

use log::{debug, trace};

use crate::config::PhysicsConfig;
use burst::Burst;
use color::Color;
use rocket::{Rocket, RocketState};

/// Size of the visible grid in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Row rockets launch from.
    pub fn bottom_row(&self) -> i32 {
        self.height as i32 - 1
    }
}

pub struct Simulation {
    bounds: Bounds,
    physics: PhysicsConfig,
    rockets: Vec<Rocket>,
    bursts: Vec<Burst>,
    rng: fastrand::Rng,
    ticks: u64,
}

impl Simulation {
    pub fn new(physics: PhysicsConfig, width: u16, height: u16) -> Self {
        Self::with_rng(physics, width, height, fastrand::Rng::new())
    }

    pub fn with_rng(physics: PhysicsConfig, width: u16, height: u16, rng: fastrand::Rng) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            physics,
            rockets: Vec::new(),
            bursts: Vec::new(),
            rng,
            ticks: 0,
        }
    }

    /// Advances every rocket and burst by one tick.
    ///
    /// Rockets that reached their target are replaced by a fresh burst at
    /// their last position. Fresh bursts start stepping on the next tick.
    pub fn advance(&mut self) {
        self.ticks += 1;

        let mut explosions = Vec::new();
        self.rockets.retain_mut(|rocket| match rocket.step() {
            RocketState::Ascending => true,
            RocketState::Exploded { x, y } => {
                explosions.push((x, y));
                false
            }
        });

        let gravity = self.physics.gravity;
        let bounds = self.bounds;
        let offscreen = self.physics.offscreen;
        self.bursts.retain_mut(|burst| {
            burst.step(gravity, bounds, offscreen);
            burst.is_alive()
        });

        for (x, y) in explosions {
            debug!("rocket exploded at ({x}, {y})");
            self.spawn_burst(x as f32, y as f32);
        }

        trace!(
            "tick {}: {} rockets, {} bursts, {} particles",
            self.ticks,
            self.rockets.len(),
            self.bursts.len(),
            self.particle_count()
        );
    }

    /// Launches a rocket from the bottom row at column `x`.
    ///
    /// Columns outside the grid are accepted; the rocket and its burst are
    /// clipped when drawn.
    pub fn spawn_rocket(&mut self, x: i32, target_y: i32) {
        let color = Color::random(&mut self.rng);
        let y = self.bounds.bottom_row();
        debug!("launching rocket at column {x} from row {y} towards row {target_y}");
        self.rockets.push(Rocket::new(x, y, target_y, color));
    }

    /// Explodes a burst at `(x, y)` immediately, without a rocket phase.
    pub fn spawn_burst(&mut self, x: f32, y: f32) {
        let color = Color::random(&mut self.rng);
        let burst = Burst::spawn(&mut self.rng, x, y, color, &self.physics);
        self.bursts.push(burst);
    }

    /// Launches a rocket at a random column, aimed at the upper half of the grid.
    pub fn launch_random(&mut self) {
        let width = self.bounds.width as i32;
        let height = self.bounds.height as i32;

        let x = if width >= 5 {
            self.rng.i32(2..=width - 3)
        } else {
            width / 2
        };
        let low = height / 6;
        let high = (height / 2).max(low + 1);
        let target_y = self.rng.i32(low..high);

        self.spawn_rocket(x, target_y);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        debug!("simulation resized to {width}x{height}");
        self.bounds = Bounds::new(width, height);
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(|burst| burst.particles().len()).sum()
    }

    pub fn is_idle(&self) -> bool {
        self.rockets.is_empty() && self.bursts.is_empty()
    }
}
