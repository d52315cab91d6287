use std::f32::consts::TAU;

use super::Bounds;
use super::color::Color;
use super::particle::Particle;
use crate::config::{OffscreenPolicy, PhysicsConfig};

/// The particles of one explosion.
#[derive(Debug, Clone)]
pub struct Burst {
    particles: Vec<Particle>,
    color: Color,
    age: u32,
    max_age: u32,
    grace: u32,
}

impl Burst {
    /// Scatters a random number of particles from `(x, y)`, all sharing `color`.
    pub fn spawn(
        rng: &mut fastrand::Rng,
        x: f32,
        y: f32,
        color: Color,
        physics: &PhysicsConfig,
    ) -> Self {
        let count = rng.usize(physics.min_particles..=physics.max_particles);
        let particles = (0..count)
            .map(|_| {
                let angle = rng.f32() * TAU;
                let speed = physics.min_speed + rng.f32() * (physics.max_speed - physics.min_speed);
                let glyph = physics
                    .glyphs
                    .get(rng.usize(..physics.glyphs.len().max(1)))
                    .copied()
                    .unwrap_or('*');
                Particle {
                    x,
                    y,
                    vx: speed * angle.cos(),
                    vy: speed * angle.sin() * physics.vertical_spread,
                    glyph,
                    color,
                    lifetime: rng.i32(physics.min_lifetime..=physics.max_lifetime),
                }
            })
            .collect();

        Self::from_particles(particles, color, physics)
    }

    /// Builds a burst around an explicit particle set.
    pub fn from_particles(particles: Vec<Particle>, color: Color, physics: &PhysicsConfig) -> Self {
        Self {
            particles,
            color,
            age: 0,
            max_age: physics.max_burst_age,
            grace: physics.burst_grace,
        }
    }

    pub fn step(&mut self, gravity: f32, bounds: Bounds, offscreen: OffscreenPolicy) {
        self.particles.retain_mut(|particle| {
            particle.step(gravity);
            if !particle.is_alive() {
                return false;
            }
            match offscreen {
                OffscreenPolicy::Cull => {
                    let (x, y) = particle.cell();
                    bounds.contains(x, y)
                }
                OffscreenPolicy::Retain => true,
            }
        });
        self.age += 1;
    }

    pub fn is_alive(&self) -> bool {
        if self.age >= self.max_age {
            return false;
        }
        !(self.age > self.grace && self.particles.is_empty())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}
