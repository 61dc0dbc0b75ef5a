//! Session types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Named state of the shell session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Landing,
    Agents,
    Login,
    CreditAgent,
    AssetAgent,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Landing,
        Stage::Agents,
        Stage::Login,
        Stage::CreditAgent,
        Stage::AssetAgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Agents => "agents",
            Self::Login => "login",
            Self::CreditAgent => "credit_agent",
            Self::AssetAgent => "asset_agent",
        }
    }

    /// Workflow stages have no outgoing transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::CreditAgent | Self::AssetAgent)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| Error::InvalidStage(s.to_string()))
    }
}

/// Workflow variant a user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentChoice {
    #[default]
    Credit,
    Asset,
}

impl AgentChoice {
    /// Stage a successful login lands on for this agent
    pub fn workflow_stage(self) -> Stage {
        match self {
            Self::Credit => Stage::CreditAgent,
            Self::Asset => Stage::AssetAgent,
        }
    }

    /// Capitalized name used in view titles
    pub fn label(self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::Asset => "Asset",
        }
    }
}

impl fmt::Display for AgentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => f.write_str("credit"),
            Self::Asset => f.write_str("asset"),
        }
    }
}

/// Identity captured at login. Nothing here is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    /// ISO-8601 UTC timestamp
    pub timestamp: String,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    /// Placeholder held before anyone logs in
    pub fn anonymous(at: DateTime<Utc>) -> Self {
        Self::new("", "", at)
    }
}

/// User input the stage machine understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// "View agents" on the landing view
    ViewAgents,
    /// Launch one of the workflows from the agents view
    ChooseAgent(AgentChoice),
    /// Submit the login form. The password is never part of the action.
    SubmitLogin { name: String, email: String },
    /// Return to the previous view
    Back,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewAgents => "view_agents",
            Self::ChooseAgent(AgentChoice::Credit) => "choose_credit",
            Self::ChooseAgent(AgentChoice::Asset) => "choose_asset",
            Self::SubmitLogin { .. } => "submit_login",
            Self::Back => "back",
        }
    }
}

/// State of one interactive session, held only in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Random id used to correlate log lines
    pub id: String,
    pub stage: Stage,
    pub selected_agent: AgentChoice,
    /// Where a successful login goes; always a workflow stage
    pub login_target: Stage,
    pub user_info: UserInfo,
}

impl SessionState {
    /// Fresh session at the landing stage
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            stage: Stage::Landing,
            selected_agent: AgentChoice::Credit,
            login_target: Stage::CreditAgent,
            user_info: UserInfo::anonymous(now),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
