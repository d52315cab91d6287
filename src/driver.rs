use log::{debug, info};
use std::io;
use std::ops::ControlFlow;

use crate::config::ClickPolicy;
use crate::event::{EventSource, SimEvent};
use crate::simulation::Simulation;
use crate::surface::Surface;

pub const ROCKET_GLYPH: char = '^';
pub const TRAIL_GLYPH: char = '|';

/// Owns the simulation and feeds it events until `Quit`.
pub struct Driver<S: Surface, E: EventSource> {
    simulation: Simulation,
    surface: S,
    events: E,
    click: ClickPolicy,
    frames: u64,
}

impl<S: Surface, E: EventSource> Driver<S, E> {
    pub fn new(simulation: Simulation, surface: S, events: E, click: ClickPolicy) -> Self {
        Self {
            simulation,
            surface,
            events,
            click,
            frames: 0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let event = self.events.next_event()?;
            if self.handle(event)?.is_break() {
                break;
            }
        }
        info!("quit after {} frames", self.frames);
        Ok(())
    }

    pub fn handle(&mut self, event: SimEvent) -> io::Result<ControlFlow<()>> {
        match event {
            SimEvent::Tick => {
                self.simulation.advance();
                render(&self.simulation, &mut self.surface)?;
                self.frames += 1;
            }
            SimEvent::LaunchTick => self.simulation.launch_random(),
            SimEvent::Click { x, y } => {
                debug!("click at ({x}, {y})");
                match self.click {
                    ClickPolicy::Rocket => self.simulation.spawn_rocket(x as i32, y as i32),
                    ClickPolicy::Burst => self.simulation.spawn_burst(x as f32, y as f32),
                }
            }
            SimEvent::Resize { width, height } => {
                self.surface.resize(width, height)?;
                self.simulation.resize(width, height);
            }
            SimEvent::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn into_simulation(self) -> Simulation {
        self.simulation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Draws one frame: particles first, rockets and their trails on top.
pub fn render<S: Surface>(simulation: &Simulation, surface: &mut S) -> io::Result<()> {
    surface.clear();

    for burst in simulation.bursts() {
        for particle in burst.particles() {
            let (x, y) = particle.cell();
            surface.set_cell(x, y, particle.glyph, particle.color);
        }
    }

    for rocket in simulation.rockets() {
        surface.set_cell(rocket.x, rocket.y, ROCKET_GLYPH, rocket.color);
        if rocket.trail_visible() {
            surface.set_cell(rocket.x, rocket.y + 1, TRAIL_GLYPH, rocket.color);
        }
    }

    surface.present()
}
