//! Terminal session setup and teardown

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Owns raw mode, the alternate screen and mouse capture (our scroll
/// event source). Everything is released in `Drop`, so an early return
/// or an unwinding panic still leaves the user's terminal usable.
pub struct TerminalSession {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore(&mut stdout);
            return Err(e.into());
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore(&mut io::stdout());
                return Err(e.into());
            }
        };
        tracing::debug!("terminal session started");
        Ok(Self { terminal })
    }
}

/// Undo raw mode, the alternate screen and mouse capture. Leaving a mode
/// that was never entered is harmless.
fn restore<W: Write>(out: &mut W) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "failed to disable raw mode");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to leave alternate screen");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
        tracing::debug!("terminal session restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_writes_leave_sequences() {
        let mut out = Vec::new();
        restore(&mut out);
        let written = String::from_utf8(out).unwrap();
        // Leave alternate screen, then stop reporting the mouse
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?1000l"), "{written:?}");
    }
}
