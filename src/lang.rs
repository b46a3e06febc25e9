//! User-facing messages and their translations

use crate::constants::LANG_ENV_VARS;
use clap::ValueEnum;
use serde::Deserialize;

/// Language used for messages shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
pub enum Lang {
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    #[serde(rename = "ru")]
    #[value(name = "ru")]
    Russian,
}

impl Lang {
    /// Picks the language from the locale environment variables.
    /// Falls back to English when none of them is set.
    pub fn from_env() -> Self {
        let locale = LANG_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty());

        match locale {
            Some(locale) => Self::from_locale(&locale),
            None => Self::default(),
        }
    }

    /// Maps a POSIX locale string such as `ru_RU.UTF-8` to a language.
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_ascii_lowercase().starts_with("ru") {
            Lang::Russian
        } else {
            Lang::English
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangMessage {
    RunFromConsole,
    InvalidAnswer,
    EnterNickname,
    ChooseJava,
    BundledJava,
    SystemJava,
    Greeting,
}

impl LangMessage {
    pub fn to_string(&self, lang: Lang) -> String {
        let text = match lang {
            Lang::English => match self {
                LangMessage::RunFromConsole => "Please run the launcher from a console",
                LangMessage::InvalidAnswer => "Invalid answer",
                LangMessage::EnterNickname => "Enter your nickname",
                LangMessage::ChooseJava => "Choose an option",
                LangMessage::BundledJava => "Use bundled Java",
                LangMessage::SystemJava => "Path to java",
                LangMessage::Greeting => "Selected",
            },
            Lang::Russian => match self {
                LangMessage::RunFromConsole => "Пожалуйста, запустите лаунчер из консоли",
                LangMessage::InvalidAnswer => "Недопустимое значение",
                LangMessage::EnterNickname => "Введите ник",
                LangMessage::ChooseJava => "Выберите вариант",
                LangMessage::BundledJava => "Использовать встроенную Java",
                LangMessage::SystemJava => "Путь к java",
                LangMessage::Greeting => "Выбрано",
            },
        };
        text.to_string()
    }
}
