//! Stage transitions

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use super::types::{Action, SessionState, Stage, UserInfo};

/// Rejected transition. The session stays where it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    #[error("Please provide both username and email.")]
    MissingCredentials,

    #[error("Action '{action}' is not available in stage '{stage}'")]
    InvalidAction { stage: Stage, action: &'static str },
}

impl SessionState {
    /// Compute the state that follows `action`, stamping logins with `now`.
    ///
    /// On error the caller keeps the current state; `self` is never modified.
    pub fn apply(&self, action: Action, now: DateTime<Utc>) -> Result<SessionState, StageError> {
        let mut next = self.clone();

        match (self.stage, action) {
            (Stage::Landing, Action::ViewAgents) => {
                next.stage = Stage::Agents;
            }
            (Stage::Agents, Action::ChooseAgent(agent)) => {
                next.selected_agent = agent;
                next.login_target = agent.workflow_stage();
                next.stage = Stage::Login;
            }
            (Stage::Agents, Action::Back) => {
                next.stage = Stage::Landing;
            }
            (Stage::Login, Action::SubmitLogin { name, email }) => {
                let name = name.trim();
                let email = email.trim();
                if name.is_empty() || email.is_empty() {
                    debug!(session = %self.id, "Login rejected: missing username or email");
                    return Err(StageError::MissingCredentials);
                }
                next.user_info = UserInfo::new(name, email, now);
                next.stage = self.login_target;
            }
            (Stage::Login, Action::Back) => {
                next.stage = Stage::Agents;
            }
            (stage, action) => {
                debug!(session = %self.id, "Invalid action {} in stage {}", action.name(), stage);
                return Err(StageError::InvalidAction {
                    stage,
                    action: action.name(),
                });
            }
        }

        debug!(session = %self.id, "Stage transition: {} -> {}", self.stage, next.stage);
        Ok(next)
    }

    /// `apply` with the current wall-clock time
    pub fn apply_now(&self, action: Action) -> Result<SessionState, StageError> {
        self.apply(action, Utc::now())
    }
}
