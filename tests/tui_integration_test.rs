//! End-to-end checks of the prompt facade with a fake terminal and scripted answers

use launcher_tui::prompt::{RenderConfig, ScriptedPrompter, Validator};
use launcher_tui::{Error, Lang, Settings, Terminal, Tui};
use test_log::test;

struct FakeTerminal {
    interactive: bool,
}

impl Terminal for FakeTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn clear(&self) -> std::io::Result<()> {
        Ok(())
    }
}

fn tui(prompter: ScriptedPrompter) -> Tui<FakeTerminal, ScriptedPrompter> {
    let settings = Settings { lang: Some(Lang::English), ..Settings::default() };
    Tui::with_settings(FakeTerminal { interactive: true }, prompter, &settings)
}

#[test]
fn guard_rejects_non_interactive_output() {
    let settings = Settings { lang: Some(Lang::English), ..Settings::default() };
    let tui = Tui::with_settings(
        FakeTerminal { interactive: false },
        ScriptedPrompter::new(),
        &settings,
    );

    let err = tui.ensure_tty().unwrap_err();
    assert!(matches!(err, Error::NotATerminal { .. }));
    assert_eq!(err.to_string(), "Please run the launcher from a console");
}

#[test]
fn validator_reprompts_until_accepted() {
    let tui = tui(ScriptedPrompter::new().with_text_answers("Nickname", &["", "ok"]));
    let not_empty: Validator = &|value| !value.is_empty();

    let answer = tui.ask("Nickname", None, Some(not_empty)).unwrap();
    assert_eq!(answer, "ok");
}

#[test]
fn immediate_submit_returns_default() {
    let tui = tui(ScriptedPrompter::new().with_text_answers("Memory (GB)", &[""]));

    let answer = tui.ask("Memory (GB)", Some("42"), None).unwrap();
    assert_eq!(answer, "42");
}

#[test]
fn default_is_validated_too() {
    let tui = tui(ScriptedPrompter::new().with_text_answers("Port", &["", "25565"]));
    let numeric: Validator = &|value| value.parse::<u16>().is_ok();

    let answer = tui.ask("Port", Some("not a port"), Some(numeric)).unwrap();
    assert_eq!(answer, "25565");
}

#[test]
fn choice_returns_bound_value() {
    let tui = tui(ScriptedPrompter::new().with_choice_answer("Continue?", 1));

    let answer = tui.choice("Continue?", &[("Yes", "y"), ("No", "n")]).unwrap();
    assert_eq!(answer, "n");
}

#[test]
fn duplicate_labels_are_disambiguated_by_position() {
    let choices = [
        ("java".to_string(), "/usr/lib/jvm/java-17/bin/java".to_string()),
        ("java".to_string(), "/usr/lib/jvm/java-21/bin/java".to_string()),
        ("java".to_string(), "/opt/java/bin/java".to_string()),
    ];

    for (index, (_, expected)) in choices.iter().enumerate() {
        let tui = tui(ScriptedPrompter::new().with_choice_answer("Java", index));
        assert_eq!(&tui.choice("Java", &choices).unwrap(), expected);
    }
}

#[test]
fn value_echo_is_off_unless_enabled() {
    let quiet = tui(ScriptedPrompter::new());
    quiet.ask("Name", Some("Steve"), None).unwrap();
    quiet.choice("Pick", &[("a", 1)]).unwrap();

    for (_, render) in quiet.provider().rendered() {
        assert_eq!(render, RenderConfig { show_value_after_submit: false });
    }

    let settings = Settings {
        lang: Some(Lang::English),
        show_value_after_submit: true,
    };
    let verbose = Tui::with_settings(
        FakeTerminal { interactive: true },
        ScriptedPrompter::new(),
        &settings,
    );
    verbose.ask("Name", Some("Steve"), None).unwrap();

    let rendered = verbose.provider().rendered();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].0, "Name");
    assert!(rendered[0].1.show_value_after_submit);
}
