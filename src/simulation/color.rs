/// The firework palette. Every particle and rocket is drawn in one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    // Truecolor values, loosely after the salts that produce each color
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 30, 30),      // Strontium
            Color::Green => (0, 255, 100),    // Barium
            Color::Yellow => (255, 220, 0),   // Sodium
            Color::Blue => (60, 120, 255),    // Copper halides
            Color::Magenta => (180, 50, 255), // Potassium/Rubidium
            Color::Cyan => (0, 220, 255),
            Color::White => (255, 255, 255), // Titanium/Magnesium
        }
    }
}
