use crate::{constants::verbosity, lang::Lang, settings::Settings};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Try the launcher prompts in the current terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON file with prompt settings.
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Message language, overrides the settings file and the locale.
    #[arg(long, value_enum)]
    pub lang: Option<Lang>,

    /// Echo answers next to the prompts after they are submitted.
    #[arg(long = "show-value")]
    pub show_value: bool,
}

impl Args {
    /// Settings from the settings file with command line overrides applied.
    pub fn settings(&self) -> crate::error::Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        if self.lang.is_some() {
            settings.lang = self.lang;
        }
        if self.show_value {
            settings.show_value_after_submit = true;
        }

        Ok(settings)
    }
}

pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
