//! Chat message fields.

use crate::error::ValidationError;
use crate::validation::{require_len, require_non_empty, Validate};
use serde::{Deserialize, Serialize};

pub const MAX_USERNAME_CHARS: usize = 50;
pub const MAX_CONTENT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFields {
    pub username: String,
    pub content: String,
}

impl MessageFields {
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            content: content.into(),
        }
    }
}

impl Validate for MessageFields {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("username", &self.username)?;
        require_len("username", &self.username, 1, MAX_USERNAME_CHARS)?;
        require_non_empty("content", &self.content)?;
        require_len("content", &self.content, 1, MAX_CONTENT_CHARS)
    }
}
