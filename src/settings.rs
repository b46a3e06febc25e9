//! Settings shared by every prompt of a [`crate::Tui`]

use crate::{error::Result, lang::Lang, prompt::RenderConfig};
use serde::Deserialize;
use std::path::Path;

/// Prompt settings. Every field is optional in the JSON representation.
///
/// ```json
/// { "lang": "ru", "show_value_after_submit": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Message language. Taken from the locale environment when absent.
    pub lang: Option<Lang>,
    /// Echo the answer next to the prompt once it is submitted.
    pub show_value_after_submit: bool,
}

impl Settings {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading settings from '{}'.", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Resolved message language.
    pub fn lang(&self) -> Lang {
        self.lang.unwrap_or_else(Lang::from_env)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig { show_value_after_submit: self.show_value_after_submit }
    }
}
