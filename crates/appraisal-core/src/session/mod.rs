//! Interactive session stage machine
//!
//! A session walks landing -> agents -> login -> one of the two workflow
//! stages. Transitions are pure: they take the current state and an action
//! and return the next state, or an error that leaves the state untouched.

mod machine;
mod types;

pub use machine::StageError;
pub use types::{Action, AgentChoice, SessionState, Stage, UserInfo};
