//! Frontend Models
//!
//! Data structures matching the task API.

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Shown when the new-task input is blank
pub const EMPTY_TASK_MESSAGE: &str = "Task cannot be empty";
/// Shown when an edited title is blank
pub const EMPTY_TITLE_MESSAGE: &str = "Task title cannot be empty";

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Body for create and update-title requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBody {
    pub title: String,
}

/// Trim a title, rejecting blank input with the given message
pub fn validate_title(raw: &str, message: &str) -> Result<String, TaskError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskError::Validation(message.to_string()));
    }
    Ok(title.to_string())
}
