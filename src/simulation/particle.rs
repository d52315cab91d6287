use super::color::Color;

/// One spark of a burst. Positions are in cells with sub-cell precision,
/// velocities in cells per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub glyph: char,
    pub color: Color,
    /// Ticks left before the particle disappears.
    pub lifetime: i32,
}

impl Particle {
    /// Advances the particle by one tick (explicit Euler, no horizontal drag).
    pub fn step(&mut self, gravity: f32) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += gravity;
        self.lifetime -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    /// The grid cell the particle is drawn in.
    pub fn cell(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}
