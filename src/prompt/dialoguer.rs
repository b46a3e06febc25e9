//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    SingleChoiceConfig, SingleChoicePrompter, TextPromptConfig, TextPrompter, Validator,
};
use crate::error::Result;
use dialoguer::{Input, Select};

/// Dialoguer-based implementation of all prompt interfaces
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validator: Option<Validator<'_>>,
    ) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(&config.prompt)
            .allow_empty(true)
            .report(config.render.show_value_after_submit);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        if let Some(validator) = validator {
            let invalid_message = config.invalid_message.clone();
            input = input.validate_with(move |value: &String| {
                if validator(value.as_str()) {
                    Ok(())
                } else {
                    Err(invalid_message.clone())
                }
            });
        }

        Ok(input.interact_text()?)
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(&config.prompt)
            .items(&config.labels)
            .default(0)
            .report(config.render.show_value_after_submit)
            .interact()?;

        Ok(selection)
    }
}
