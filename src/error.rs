//! Error types for the allocation core and the binary around it

use thiserror::Error;

/// Rejections raised before any allocation work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Bad numeric settings: a zero team cap or a zero-sized team.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Inputs that do not describe a valid roster, plan or seat edit.
    #[error("validation error: {0}")]
    Validation(String),
}

impl AllocationError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, AllocationError>;

/// Errors surfaced by the `seat-planner` binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
