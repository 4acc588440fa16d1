//! Terminal queries for rls.
//!
//! Both are asked once per invocation: the column count for layout, and whether stdout is
//! an interactive terminal (drives the automatic color decision).

use crossterm::tty::IsTty;

use std::io;

/// Column count of the terminal attached to stdout, if any.
/// A reported width of zero is treated as unknown.
pub fn terminal_columns() -> Option<u16> {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => Some(cols),
        _ => None,
    }
}

/// True when stdout is an interactive terminal.
pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}
