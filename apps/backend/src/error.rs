use thiserror::Error;

use crate::errors::ErrorCode;

/// Errors at the process boundary. Domain errors never get here: they are
/// reported to the client over its websocket.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }
}
