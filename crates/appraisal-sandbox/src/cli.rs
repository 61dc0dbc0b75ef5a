//! CLI (Command Line Interface) mode
//!
//! Interactive shell over the session stage machine. Each turn renders the
//! current stage, reads one command, applies it, and reports rejections
//! inline.

use appraisal_core::{Action, AgentChoice, SessionState, Stage, StageError};
use nu_ansi_term::Style;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, Completer, DefaultHinter, Emacs, KeyCode,
    KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal, Span,
    Suggestion,
};
use tracing::info;

use crate::prompt::{self, StagePrompt};
use crate::view;

/// 全ステージ共通のコマンド
const GLOBAL_COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show available commands"),
    ("/state", "Show the session state"),
    ("/exit", "Exit the sandbox"),
];

/// Parsed shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    State,
    Exit,
    /// Open the login form
    Login,
    Apply(Action),
    Unknown(String),
}

/// Map one line of input to a command
pub fn parse_command(input: &str) -> Command {
    let lower = input.trim().to_lowercase();

    match lower.as_str() {
        "/help" | "/?" | "help" => Command::Help,
        "/state" => Command::State,
        "/exit" | "/quit" | "/q" => Command::Exit,
        "agents" | "view agents" => Command::Apply(Action::ViewAgents),
        "credit" | "launch credit workflow" => Command::Apply(Action::ChooseAgent(AgentChoice::Credit)),
        "asset" | "launch asset workflow" => Command::Apply(Action::ChooseAgent(AgentChoice::Asset)),
        "back" | "back to landing" | "back to agents" => Command::Apply(Action::Back),
        "login" => Command::Login,
        _ => Command::Unknown(input.trim().to_string()),
    }
}

/// Completer offering the current stage's commands plus the global ones
#[derive(Clone)]
pub struct CommandCompleter {
    commands: Vec<(&'static str, &'static str)>,
}

impl CommandCompleter {
    pub fn for_stage(stage: Stage) -> Self {
        let mut commands = view::stage_commands(stage).to_vec();
        commands.extend_from_slice(GLOBAL_COMMANDS);
        Self { commands }
    }
}

impl Completer for CommandCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let typed = line.trim_start().to_lowercase();

        self.commands
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(&typed))
            .map(|(cmd, desc)| Suggestion {
                value: cmd.to_string(),
                description: Some(desc.to_string()),
                extra: None,
                span: Span::new(0, pos),
                append_whitespace: false,
                style: None,
            })
            .collect()
    }
}

/// Notice shown once a workflow stage is reached
pub fn workflow_notice(stage: Stage) -> Option<&'static str> {
    stage
        .is_terminal()
        .then_some("Workflow finished. Only /help, /state and /exit are available here.")
}

/// Apply an action, keeping the current state when it is rejected
pub fn apply_action(session: &mut SessionState, action: Action) -> Result<(), StageError> {
    let next = session.apply_now(action)?;
    *session = next;
    Ok(())
}

/// Run CLI interactive mode
pub fn run_cli() -> anyhow::Result<()> {
    let mut session = SessionState::new();
    info!(session = %session.id, "Starting interactive session");

    print_welcome();

    let mut line_editor = create_line_editor(session.stage);
    let mut needs_render = true;

    loop {
        if needs_render {
            view::print_view(&view::render(&session));
            if let Some(notice) = workflow_notice(session.stage) {
                println!("{}\n", Style::new().dimmed().paint(notice));
            }
            line_editor = line_editor.with_completer(Box::new(CommandCompleter::for_stage(session.stage)));
            needs_render = false;
        }

        let signal = line_editor.read_line(&StagePrompt::new(session.stage));

        match signal {
            Ok(Signal::Success(line)) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                let action = match parse_command(input) {
                    Command::Help => {
                        print_help(session.stage);
                        continue;
                    }
                    Command::State => {
                        println!("\n{}\n", serde_json::to_string_pretty(&session)?);
                        continue;
                    }
                    Command::Exit => break,
                    Command::Unknown(other) => {
                        view::print_error(&format!("Unknown command: {}. Type /help for commands.", other));
                        continue;
                    }
                    Command::Apply(action) => action,
                    Command::Login if session.stage == Stage::Login => match prompt::read_login_form()? {
                        Some(form) => Action::SubmitLogin {
                            name: form.name,
                            email: form.email,
                        },
                        None => {
                            println!("Login cancelled.");
                            continue;
                        }
                    },
                    // Not on the login view; let the machine report it
                    Command::Login => Action::SubmitLogin {
                        name: String::new(),
                        email: String::new(),
                    },
                };

                match apply_action(&mut session, action) {
                    Ok(()) => needs_render = true,
                    Err(e) => view::print_error(&e.to_string()),
                }
            }
            Ok(Signal::CtrlC) => {
                println!("^C");
                continue;
            }
            Ok(Signal::CtrlD) => break,
            Err(err) => {
                view::print_error(&err.to_string());
                break;
            }
        }
    }

    println!("\n👋 Goodbye!\n");
    info!(session = %session.id, stage = %session.stage, "Interactive session ended");
    Ok(())
}

fn create_line_editor(stage: Stage) -> Reedline {
    let keybindings = default_keybindings();

    let menu = Box::new(
        ColumnarMenu::default()
            .with_name("command_menu")
            .with_columns(1)
            .with_column_width(Some(40))
            .with_only_buffer_difference(false),
    );

    let hinter = DefaultHinter::default().with_style(Style::new().dimmed());

    Reedline::create()
        .with_completer(Box::new(CommandCompleter::for_stage(stage)))
        .with_menu(ReedlineMenu::EngineCompleter(menu))
        .with_hinter(Box::new(hinter))
        .with_edit_mode(Box::new(Emacs::new(keybindings)))
}

/// Emacs editing keys plus Tab for the command menu
fn default_keybindings() -> Keybindings {
    let mut keybindings = default_emacs_keybindings();
    // Tab でコマンドメニューを開く
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("command_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings
}

/// Print welcome message
fn print_welcome() {
    println!();
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          AI Agent Sandbox - interactive mode               ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║  Type a command and press Enter. Tab shows suggestions.    ║");
    println!("║  Commands: /help, /state, /exit                            ║");
    println!("╚════════════════════════════════════════════════════════════╝");
}

/// Print help message
fn print_help(stage: Stage) {
    println!();
    println!("📖 Available commands:");
    for (cmd, desc) in view::stage_commands(stage).iter().chain(GLOBAL_COMMANDS) {
        println!("  {} - {}", cmd, desc);
    }
    println!();
}
