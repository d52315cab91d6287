//! Fireworks for the terminal: rockets climb from the bottom row, burst into
//! particles and fall away under gravity.

pub mod config;
pub mod driver;
pub mod event;
pub mod simulation;
pub mod surface;
pub mod terminal;

pub use config::{ClickPolicy, FireworksConfig, OffscreenPolicy, PhysicsConfig};
pub use driver::Driver;
pub use event::{EventSource, SimEvent};
pub use simulation::Simulation;
pub use surface::{Surface, TerminalSurface};
