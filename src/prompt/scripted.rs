//! Prompt provider answering from a script instead of the terminal
//!
//! Useful for automation and tests. Text answers are replayed in order the way
//! a user would type them: an empty line picks the default, and lines rejected
//! by the validator are skipped until one is accepted.

use super::interface::*;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text_answers: HashMap<String, Vec<String>>,
    choice_answers: HashMap<String, usize>,
    default_choice: usize,
    rendered: RefCell<Vec<(String, RenderConfig)>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines typed for `prompt`, in order, each followed by Enter
    pub fn with_text_answers(mut self, prompt: &str, lines: &[&str]) -> Self {
        self.text_answers
            .insert(prompt.to_string(), lines.iter().map(|line| line.to_string()).collect());
        self
    }

    /// Index selected for `prompt`
    pub fn with_choice_answer(mut self, prompt: &str, index: usize) -> Self {
        self.choice_answers.insert(prompt.to_string(), index);
        self
    }

    /// Index selected for prompts without a configured answer
    pub fn with_default_choice(mut self, index: usize) -> Self {
        self.default_choice = index;
        self
    }

    /// Prompts shown so far, with the render configuration they were given
    pub fn rendered(&self) -> Vec<(String, RenderConfig)> {
        self.rendered.borrow().clone()
    }

    fn record(&self, prompt: &str, render: RenderConfig) {
        self.rendered.borrow_mut().push((prompt.to_string(), render));
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validator: Option<Validator<'_>>,
    ) -> Result<String> {
        self.record(&config.prompt, config.render);

        // No script means the user just pressed Enter.
        let empty_line = [String::new()];
        let lines = self
            .text_answers
            .get(&config.prompt)
            .map(Vec::as_slice)
            .unwrap_or(&empty_line);

        for line in lines {
            let value = match (&config.default, line.is_empty()) {
                (Some(default), true) => default.clone(),
                _ => line.clone(),
            };

            if validator.map_or(true, |validate| validate(value.as_str())) {
                log::debug!("Answering '{}' with '{}'.", config.prompt, value);
                return Ok(value);
            }
            log::debug!("{}: '{}'", config.invalid_message, value);
        }

        Err(Error::NoScriptedAnswer { prompt: config.prompt.clone() })
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        self.record(&config.prompt, config.render);

        let index =
            self.choice_answers.get(&config.prompt).copied().unwrap_or(self.default_choice);
        log::debug!("Selecting choice {} for '{}'.", index, config.prompt);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_config(prompt: &str, default: Option<&str>) -> TextPromptConfig {
        TextPromptConfig {
            prompt: prompt.to_string(),
            default: default.map(str::to_string),
            invalid_message: "Invalid answer".to_string(),
            render: RenderConfig::default(),
        }
    }

    #[test]
    fn rejected_lines_are_skipped() {
        let prompter = ScriptedPrompter::new().with_text_answers("Name", &["", "ok"]);
        let not_empty: Validator = &|value| !value.is_empty();

        let answer = prompter.prompt_text(&text_config("Name", None), Some(not_empty));
        assert_eq!(answer.unwrap(), "ok");
    }

    #[test]
    fn empty_line_takes_the_default() {
        let prompter = ScriptedPrompter::new();
        let answer = prompter.prompt_text(&text_config("Memory", Some("42")), None);
        assert_eq!(answer.unwrap(), "42");
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let prompter = ScriptedPrompter::new().with_text_answers("Name", &["", " "]);
        let not_blank: Validator = &|value| !value.trim().is_empty();

        let result = prompter.prompt_text(&text_config("Name", None), Some(not_blank));
        assert!(matches!(result, Err(Error::NoScriptedAnswer { prompt }) if prompt == "Name"));
    }

    #[test]
    fn unscripted_choice_uses_default_index() {
        let prompter = ScriptedPrompter::new().with_default_choice(2);
        let config = SingleChoiceConfig {
            prompt: "Pick".to_string(),
            labels: vec!["a".into(), "b".into(), "c".into()],
            render: RenderConfig::default(),
        };
        assert_eq!(prompter.prompt_single_choice(&config).unwrap(), 2);
        assert_eq!(prompter.rendered().len(), 1);
    }
}
