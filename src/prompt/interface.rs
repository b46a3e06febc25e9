//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of any specific UI library implementation.

use crate::error::Result;

/// Rendering options passed to the provider with every prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Echo the submitted value next to the prompt after interaction
    pub show_value_after_submit: bool,
}

/// Predicate deciding whether an entered line is acceptable
pub type Validator<'a> = &'a dyn Fn(&str) -> bool;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
    /// Shown when the validator rejects the entered line
    pub invalid_message: String,
    pub render: RenderConfig,
}

/// Configuration for single choice selection
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub labels: Vec<String>,
    pub render: RenderConfig,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    /// Blocks until a line is submitted. With a validator, keeps asking until
    /// the validator accepts the line.
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validator: Option<Validator<'_>>,
    ) -> Result<String>;
}

/// Abstract interface for single choice selection
pub trait SingleChoicePrompter {
    /// Blocks until a label is selected and returns its index.
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + SingleChoicePrompter {}

impl<T> PromptProvider for T where T: TextPrompter + SingleChoicePrompter {}
