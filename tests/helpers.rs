use std::collections::VecDeque;
use std::io;

use termfireworks::simulation::burst::Burst;
use termfireworks::simulation::color::Color;
use termfireworks::simulation::particle::Particle;
use termfireworks::{EventSource, PhysicsConfig, SimEvent};

/// Replays a fixed list of events, then quits.
#[allow(unused)]
pub struct ScriptedEvents {
    events: VecDeque<SimEvent>,
}

#[allow(unused)]
impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = SimEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<SimEvent> {
        Ok(self.events.pop_front().unwrap_or(SimEvent::Quit))
    }
}

#[allow(unused)]
pub fn particle(x: f32, y: f32, vx: f32, vy: f32, lifetime: i32) -> Particle {
    Particle {
        x,
        y,
        vx,
        vy,
        glyph: '*',
        color: Color::White,
        lifetime,
    }
}

#[allow(unused)]
pub fn burst_of(particles: Vec<Particle>) -> Burst {
    Burst::from_particles(particles, Color::White, &PhysicsConfig::default())
}
