/// Handles argument parsing for the demo binary.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// User-facing messages and their translations.
pub mod lang;

/// Prompt interfaces and their implementations.
pub mod prompt;

/// Prompt settings loaded from JSON.
pub mod settings;

/// Terminal detection and screen clearing.
pub mod terminal;

/// The prompt facade.
pub mod tui;

pub use error::{Error, Result};
pub use lang::Lang;
pub use settings::Settings;
pub use terminal::{StdoutTerminal, Terminal};
pub use tui::{ask, choice, clear, ensure_tty, Tui};
