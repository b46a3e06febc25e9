//! Console prompt facade used by the launcher
//!
//! [`Tui`] combines a [`Terminal`] with a [`PromptProvider`]. The free
//! functions at the bottom of this module use the real terminal and
//! dialoguer-based prompts.

use crate::{
    error::{Error, Result},
    lang::{Lang, LangMessage},
    prompt::{
        DialoguerPrompter, PromptProvider, RenderConfig, SingleChoiceConfig,
        TextPromptConfig, Validator,
    },
    settings::Settings,
    terminal::{StdoutTerminal, Terminal},
};

pub struct Tui<T: Terminal, P: PromptProvider> {
    terminal: T,
    provider: P,
    lang: Lang,
    render: RenderConfig,
}

impl Tui<StdoutTerminal, DialoguerPrompter> {
    /// Real terminal, dialoguer prompts and settings taken from the environment.
    pub fn stdout() -> Self {
        Self::new(StdoutTerminal, DialoguerPrompter::new())
    }
}

impl<T: Terminal, P: PromptProvider> Tui<T, P> {
    pub fn new(terminal: T, provider: P) -> Self {
        Self::with_settings(terminal, provider, &Settings::default())
    }

    pub fn with_settings(terminal: T, provider: P, settings: &Settings) -> Self {
        Self {
            terminal,
            provider,
            lang: settings.lang(),
            render: settings.render_config(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fails unless standard output is an interactive terminal.
    pub fn ensure_tty(&self) -> Result<()> {
        if self.terminal.is_interactive() {
            return Ok(());
        }

        let message = LangMessage::RunFromConsole.to_string(self.lang);
        log::warn!("Standard output is not a terminal.");
        Err(Error::NotATerminal { message })
    }

    /// Asks for a line of text.
    ///
    /// With a `validate` predicate the question is repeated until the
    /// entered line is accepted.
    pub fn ask(
        &self,
        message: &str,
        default: Option<&str>,
        validate: Option<Validator<'_>>,
    ) -> Result<String> {
        let config = TextPromptConfig {
            prompt: message.to_string(),
            default: default.map(str::to_string),
            invalid_message: LangMessage::InvalidAnswer.to_string(self.lang),
            render: self.render,
        };

        log::debug!("Asking '{}' (default: {:?}).", message, default);
        self.provider.prompt_text(&config, validate)
    }

    /// Shows `choices` by label and returns the value of the selected one.
    pub fn choice<L, V>(&self, message: &str, choices: &[(L, V)]) -> Result<V>
    where
        L: AsRef<str>,
        V: Clone,
    {
        if choices.is_empty() {
            return Err(Error::NoChoices);
        }

        let config = SingleChoiceConfig {
            prompt: message.to_string(),
            labels: choices.iter().map(|(label, _)| label.as_ref().to_string()).collect(),
            render: self.render,
        };

        log::debug!("Offering {} choices for '{}'.", choices.len(), message);
        let index = self.provider.prompt_single_choice(&config)?;

        choices
            .get(index)
            .map(|(_, value)| value.clone())
            .ok_or(Error::SelectionOutOfRange { index, len: choices.len() })
    }

    /// Clears the screen.
    pub fn clear(&self) -> Result<()> {
        Ok(self.terminal.clear()?)
    }
}

/// Fails unless standard output is an interactive terminal.
pub fn ensure_tty() -> Result<()> {
    Tui::stdout().ensure_tty()
}

/// Asks for a line of text on the real terminal.
pub fn ask(
    message: &str,
    default: Option<&str>,
    validate: Option<Validator<'_>>,
) -> Result<String> {
    Tui::stdout().ask(message, default, validate)
}

/// Shows a single choice list on the real terminal.
pub fn choice<L: AsRef<str>, V: Clone>(message: &str, choices: &[(L, V)]) -> Result<V> {
    Tui::stdout().choice(message, choices)
}

/// Clears the real terminal.
pub fn clear() -> Result<()> {
    Tui::stdout().clear()
}
