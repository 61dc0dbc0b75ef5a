//! エラー型定義 (appraisal-api)

use thiserror::Error;

/// appraisal-api のエラー型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid bind address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
