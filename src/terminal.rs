use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use std::io::{self, stdout};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

/// Flag raised when the process is asked to terminate from outside
/// (`kill`, a closed terminal). The event loop turns it into a quit so the
/// guard below still restores the terminal.
pub fn shutdown_flag() -> io::Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    for signal in [SIGTERM, SIGINT, SIGHUP] {
        signal_hook::flag::register(signal, Arc::clone(&flag))?;
    }
    Ok(flag)
}

/// Raw mode, alternate screen, hidden cursor and mouse capture for as long
/// as the guard lives. Dropping it restores the terminal, including when the
/// program unwinds on an error.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { _private: () };
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            EnableMouseCapture
        )?;
        Ok(guard)
    }

    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = stdout();
        if let Err(err) = execute!(stdout, Show, LeaveAlternateScreen, DisableMouseCapture) {
            warn!("failed to leave the alternate screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {err}");
        }
    }
}
