//! Stage views
//!
//! Each stage maps to exactly one view. Building a view is pure; printing
//! it is the only side effect.

use appraisal_core::{AgentChoice, SessionState, Stage};
use nu_ansi_term::{Color, Style};

/// How a view line is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Info,
}

/// Renderable content for one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub lines: Vec<(Tone, String)>,
    /// Commands offered by this view, with their labels
    pub commands: &'static [(&'static str, &'static str)],
}

impl View {
    fn new(title: impl Into<String>, commands: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            commands,
        }
    }

    fn line(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.lines.push((tone, text.into()));
        self
    }
}

const LANDING_COMMANDS: &[(&str, &str)] = &[("agents", "View agents")];

const AGENTS_COMMANDS: &[(&str, &str)] = &[
    ("credit", "Launch credit workflow"),
    ("asset", "Launch asset workflow"),
    ("back", "Back to landing"),
];

const LOGIN_COMMANDS: &[(&str, &str)] = &[("login", "Login"), ("back", "Back to agents")];

/// Commands a stage accepts besides the global ones
pub fn stage_commands(stage: Stage) -> &'static [(&'static str, &'static str)] {
    match stage {
        Stage::Landing => LANDING_COMMANDS,
        Stage::Agents => AGENTS_COMMANDS,
        Stage::Login => LOGIN_COMMANDS,
        Stage::CreditAgent | Stage::AssetAgent => &[],
    }
}

/// Build the view for the session's current stage
pub fn render(session: &SessionState) -> View {
    let commands = stage_commands(session.stage);

    match session.stage {
        Stage::Landing => View::new("Open AI Agent Sandbox", commands)
            .line(Tone::Plain, "Launch an appraisal workflow to get started."),
        Stage::Agents => View::new("Available agents", commands)
            .line(Tone::Heading, "Credit Appraisal Agent")
            .line(Tone::Plain, "Explainable AI for loan decisioning.")
            .line(Tone::Heading, "Asset Appraisal Agent")
            .line(Tone::Plain, "Market-driven collateral valuation."),
        Stage::Login => login_view(session.selected_agent, commands),
        Stage::CreditAgent => View::new("Credit Appraisal Workflow", commands)
            .line(Tone::Success, "You are now in the credit appraisal workflow."),
        Stage::AssetAgent => View::new("Asset Appraisal Workflow", commands)
            .line(Tone::Success, "You are now in the asset appraisal workflow.")
            .line(
                Tone::Info,
                "This dedicated asset flow ensures collateral valuation features are shown \
                 instead of the credit appraisal steps.",
            ),
    }
}

fn login_view(agent: AgentChoice, commands: &'static [(&'static str, &'static str)]) -> View {
    View::new(format!("Login to {} Appraisal Platform", agent.label()), commands)
        .line(Tone::Plain, "Enter 'login' to provide your username, email and password.")
}

/// Print a view to stdout
pub fn print_view(view: &View) {
    println!();
    println!("{}", Color::Cyan.bold().paint(view.title.as_str()));
    println!("{}", "─".repeat(view.title.chars().count().max(20)));

    for (tone, text) in &view.lines {
        let styled = match tone {
            Tone::Plain => Style::new().paint(text.as_str()),
            Tone::Heading => Style::new().bold().paint(text.as_str()),
            Tone::Success => Color::Green.paint(format!("✅ {}", text)),
            Tone::Info => Color::Blue.paint(format!("ℹ️  {}", text)),
        };
        println!("{}", styled);
    }

    if !view.commands.is_empty() {
        println!();
        for (cmd, label) in view.commands {
            println!("  {} - {}", Color::Yellow.paint(*cmd), label);
        }
    }
    println!();
}

/// Print an inline validation or transition error
pub fn print_error(message: &str) {
    eprintln!("{}", Color::Red.paint(format!("❌ {}", message)));
}
