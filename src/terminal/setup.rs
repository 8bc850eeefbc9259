//! Terminal setup and teardown.
//!
//! Low-level enter/leave functions for TUI mode, used by
//! [`super::TerminalManager`] and by the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: alternate screen, bracketed paste, mouse capture.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )
}

/// Leave TUI mode and restore the terminal to a normal state.
///
/// Safe to call more than once; errors are ignored so cleanup can run in
/// any terminal state.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(
        writer,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic or error. Ignores all failures.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
