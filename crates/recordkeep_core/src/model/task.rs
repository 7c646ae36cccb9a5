//! Task fields.

use crate::error::ValidationError;
use crate::validation::{require_non_empty, Validate};
use serde::{Deserialize, Serialize};

/// Caller-owned part of a task record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl TaskFields {
    /// New open task.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            done: false,
        }
    }
}

impl Validate for TaskFields {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)
    }
}
