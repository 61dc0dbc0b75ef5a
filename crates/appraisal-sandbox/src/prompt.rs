//! Line prompts for the interactive shell
//!
//! Colored stage prompt, plain field prompts for the login form, and a
//! masked password reader.

use std::borrow::Cow;
use std::io::{self, Write};

use appraisal_core::Stage;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use nu_ansi_term::{Color, Style};
use reedline::{Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal};

/// Main prompt showing the current stage
pub struct StagePrompt {
    stage: Stage,
    style: Style,
}

impl StagePrompt {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            style: Color::Cyan.bold(),
        }
    }
}

impl Prompt for StagePrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(self.style.paint(format!("[{}] > ", self.stage)).to_string())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

/// Prompt for one login form field
struct FieldPrompt {
    label: &'static str,
}

impl Prompt for FieldPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}: ", self.label))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

/// Values typed into the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
}

/// Read username, email and password. `None` when the user cancels.
///
/// The password is read masked and dropped here; nothing checks it.
pub fn read_login_form() -> io::Result<Option<LoginForm>> {
    let mut editor = Reedline::create();

    let Some(name) = read_field(&mut editor, "Username")? else {
        return Ok(None);
    };
    let Some(email) = read_field(&mut editor, "Email")? else {
        return Ok(None);
    };
    if read_masked("Password")?.is_none() {
        return Ok(None);
    }

    Ok(Some(LoginForm { name, email }))
}

fn read_field(editor: &mut Reedline, label: &'static str) -> io::Result<Option<String>> {
    match editor.read_line(&FieldPrompt { label })? {
        Signal::Success(line) => Ok(Some(line)),
        _ => Ok(None),
    }
}

/// Read a line without echoing it, printing `*` per character
pub fn read_masked(label: &str) -> io::Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    terminal::enable_raw_mode()?;
    let result = read_masked_raw();
    terminal::disable_raw_mode()?;
    println!();

    result
}

fn read_masked_raw() -> io::Result<Option<String>> {
    let mut buffer = String::new();
    let mut stdout = io::stdout();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match apply_masked_key(&mut buffer, key) {
            MaskedInput::Pending(echo) => {
                if !echo.is_empty() {
                    stdout.write_all(echo.as_bytes())?;
                    stdout.flush()?;
                }
            }
            MaskedInput::Done => return Ok(Some(buffer)),
            MaskedInput::Cancelled => return Ok(None),
        }
    }
}

/// Outcome of one key press in the masked reader
#[derive(Debug, PartialEq, Eq)]
enum MaskedInput {
    /// Keep reading; print the given echo
    Pending(&'static str),
    Done,
    Cancelled,
}

fn apply_masked_key(buffer: &mut String, key: KeyEvent) -> MaskedInput {
    if key.kind == KeyEventKind::Release {
        return MaskedInput::Pending("");
    }

    match key.code {
        KeyCode::Enter => MaskedInput::Done,
        KeyCode::Esc => MaskedInput::Cancelled,
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            MaskedInput::Cancelled
        }
        KeyCode::Backspace => {
            if buffer.pop().is_some() {
                MaskedInput::Pending("\u{8} \u{8}")
            } else {
                MaskedInput::Pending("")
            }
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            MaskedInput::Pending("*")
        }
        _ => MaskedInput::Pending(""),
    }
}
