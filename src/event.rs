use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Longest single wait, so a raised shutdown flag is noticed even with slow timers.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Everything the driver reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// Advance the simulation and redraw.
    Tick,
    /// Launch a rocket at a random spot.
    LaunchTick,
    Click { x: u16, y: u16 },
    Resize { width: u16, height: u16 },
    Quit,
}

pub trait EventSource {
    /// Blocks until the next event is due.
    fn next_event(&mut self) -> io::Result<SimEvent>;
}

/// Periodic deadline. A late timer restarts from the moment it fired instead
/// of firing repeatedly to catch up.
#[derive(Debug, Clone, Copy)]
struct Timer {
    period: Duration,
    next: Instant,
}

impl Timer {
    fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    fn fire_if_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}

/// Terminal input plus the tick and launch timers, multiplexed on one
/// blocking `poll`. A raised `shutdown` flag ends the stream with `Quit`.
pub struct TerminalEvents {
    tick: Timer,
    launch: Timer,
    shutdown: Arc<AtomicBool>,
}

impl TerminalEvents {
    pub fn new(tick: Duration, launch: Duration, shutdown: Arc<AtomicBool>) -> Self {
        let now = Instant::now();
        Self {
            tick: Timer::new(tick, now),
            launch: Timer::new(launch, now),
            shutdown,
        }
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<SimEvent> {
        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                return Ok(SimEvent::Quit);
            }

            let now = Instant::now();
            if self.tick.fire_if_due(now) {
                return Ok(SimEvent::Tick);
            }
            if self.launch.fire_if_due(now) {
                return Ok(SimEvent::LaunchTick);
            }

            let deadline = self.tick.next.min(self.launch.next);
            let timeout = deadline.saturating_duration_since(now).min(MAX_POLL);
            if event::poll(timeout)? {
                if let Some(event) = translate(&event::read()?) {
                    return Ok(event);
                }
            }
        }
    }
}

fn translate(event: &Event) -> Option<SimEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            let quit = key_event.code == KeyCode::Char('q')
                || key_event.code == KeyCode::Esc
                || (key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL));
            quit.then_some(SimEvent::Quit)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(SimEvent::Click {
                x: mouse_event.column,
                y: mouse_event.row,
            }),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(SimEvent::Resize {
            width: *cols,
            height: *rows,
        }),
        _ => None,
    }
}
