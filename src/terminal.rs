//! Terminal capability used by the prompts
//!
//! The process-wide terminal is hidden behind [`Terminal`] so callers can
//! substitute a fake one without touching the real standard streams.

use crate::constants::CLEAR_SCREEN;
use std::io::{self, IsTerminal, Write};

pub trait Terminal {
    /// Whether standard output is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Clears the screen and flushes the output.
    fn clear(&self) -> io::Result<()>;
}

/// The terminal attached to the process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTerminal;

impl Terminal for StdoutTerminal {
    fn is_interactive(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn clear(&self) -> io::Result<()> {
        clear_screen(&mut io::stdout().lock())
    }
}

/// Writes the clear screen sequence to `out` and flushes it.
pub fn clear_screen<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN)?;
    out.flush()
}
