//! Error types for appraisal-core

use thiserror::Error;

/// Main error type for appraisal-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown stage: {0}")]
    InvalidStage(String),
}

/// Result type alias for appraisal-core
pub type Result<T> = std::result::Result<T, Error>;
