use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The process is not attached to an interactive terminal.
    /// The message is already localized and is shown to the user as is.
    #[error("{message}")]
    NotATerminal { message: String },

    #[error("Prompt failed. Original error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file. Original error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("Cannot show a choice prompt without choices.")]
    NoChoices,

    #[error("Selected index {index} is out of range for {len} choices.")]
    SelectionOutOfRange { index: usize, len: usize },

    /// A scripted prompt ran out of answers that pass validation.
    #[error("No acceptable scripted answer for prompt '{prompt}'.")]
    NoScriptedAnswer { prompt: String },
}

/// Convenience type alias for Results with the launcher TUI error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_terminal_displays_message_verbatim() {
        let err = Error::NotATerminal { message: "Run me from a console".to_string() };
        assert_eq!(err.to_string(), "Run me from a console");
    }

    #[test]
    fn out_of_range_mentions_index_and_len() {
        let err = Error::SelectionOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Selected index 3 is out of range for 2 choices.");
    }
}
