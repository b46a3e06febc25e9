//! Constants used throughout the launcher TUI

/// Escape sequence that resets the terminal and clears the screen (`ESC c`)
pub const CLEAR_SCREEN: &[u8] = b"\x1bc";

/// Environment variables consulted for the message language, in order of preference
pub const LANG_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
