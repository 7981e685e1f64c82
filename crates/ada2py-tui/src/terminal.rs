//! Terminal session for the TUI: raw mode, alternate screen and bracketed
//! paste, torn down the same way on exit and on panic.

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::warn;

/// Enter the TUI screen and hook panics so a crash restores the shell.
pub fn init() -> DefaultTerminal {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));

    let term = ratatui::init();

    // Pasted paths arrive as one event instead of a burst of keys
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    term
}

/// Leave the TUI screen. Safe to call more than once.
pub fn restore() {
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();
}
