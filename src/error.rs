//! Error Types
//!
//! Failures the task list can run into. None of them are fatal: the view
//! shows a message and keeps the last good state.

use thiserror::Error;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Rejected locally, never sent
    #[error("{0}")]
    Validation(String),

    /// Server answered with a non-2xx status
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Transport or decode failure
    #[error("Network error: {0}")]
    Network(String),

    /// User declined the confirmation prompt
    #[error("Cancelled")]
    Cancelled,
}

impl TaskError {
    pub fn is_network(&self) -> bool {
        matches!(self, TaskError::Status { .. } | TaskError::Network(_))
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TaskError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            },
            None => TaskError::Network(err.to_string()),
        }
    }
}
