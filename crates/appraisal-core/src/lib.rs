//! appraisal-core: Appraisal Sandbox Core Library
//!
//! Placeholder asset valuation, the stage machine behind the interactive
//! shell, and the shared configuration and error types.

pub mod config;
pub mod error;
pub mod session;
pub mod valuation;

pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use session::{Action, AgentChoice, SessionState, Stage, StageError, UserInfo};
pub use valuation::{AssetCategory, HealthStatus, Valuation, ValuationRequest};
