use launcher_tui::{
    cli::{get_log_level_from_verbose, Args},
    error::{default_error_handler, Result},
    lang::LangMessage,
    prompt::{DialoguerPrompter, Validator},
    StdoutTerminal, Tui,
};
use clap::Parser;

/// Java runtimes offered by the demo session.
#[derive(Debug, Clone, PartialEq)]
enum JavaChoice {
    Bundled,
    System(String),
}

fn run(args: &Args) -> Result<()> {
    let settings = args.settings()?;
    let tui = Tui::with_settings(StdoutTerminal, DialoguerPrompter::new(), &settings);
    let lang = tui.lang();

    tui.ensure_tty()?;
    tui.clear()?;

    let not_empty: Validator = &|value| !value.trim().is_empty();
    let nickname =
        tui.ask(&LangMessage::EnterNickname.to_string(lang), None, Some(not_empty))?;
    log::info!("Nickname entered: '{}'.", nickname);

    let system_java = "/usr/bin/java";
    let choices = [
        (LangMessage::BundledJava.to_string(lang), JavaChoice::Bundled),
        (
            format!("{} ({})", LangMessage::SystemJava.to_string(lang), system_java),
            JavaChoice::System(system_java.to_string()),
        ),
    ];
    let java = tui.choice(&LangMessage::ChooseJava.to_string(lang), &choices)?;

    let java = match java {
        JavaChoice::Bundled => LangMessage::BundledJava.to_string(lang),
        JavaChoice::System(path) => path,
    };
    println!("{}: {} / {}", LangMessage::Greeting.to_string(lang), nickname, java);
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    if let Err(err) = run(&args) {
        default_error_handler(err);
    }
}
