use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocketState {
    Ascending,
    Exploded { x: i32, y: i32 },
}

/// A shell climbing one row per tick towards `target_y`.
#[derive(Debug, Clone)]
pub struct Rocket {
    pub x: i32,
    pub y: i32,
    pub target_y: i32,
    pub color: Color,
    blink: u32,
}

impl Rocket {
    pub fn new(x: i32, y: i32, target_y: i32, color: Color) -> Self {
        Self {
            x,
            y,
            target_y,
            color,
            blink: 0,
        }
    }

    pub fn step(&mut self) -> RocketState {
        if self.y > self.target_y {
            self.y -= 1;
            self.blink = self.blink.wrapping_add(1);
            RocketState::Ascending
        } else {
            RocketState::Exploded { x: self.x, y: self.y }
        }
    }

    /// Whether the trail below the rocket is lit this tick. Flips every tick.
    pub fn trail_visible(&self) -> bool {
        self.blink % 2 == 1
    }
}
