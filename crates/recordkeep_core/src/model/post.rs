//! Blog post fields.

use crate::error::ValidationError;
use crate::validation::{require_len, Validate};
use serde::{Deserialize, Serialize};

pub const MIN_TITLE_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    /// Author reference; not checked against any user store.
    pub user_id: u64,
    pub title: String,
    pub content: String,
    pub published: bool,
}

impl PostFields {
    /// Unpublished draft.
    pub fn draft(user_id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            content: content.into(),
            published: false,
        }
    }
}

impl Validate for PostFields {
    fn validate(&self) -> Result<(), ValidationError> {
        // Titles have a floor but no ceiling.
        require_len("title", &self.title, MIN_TITLE_CHARS, usize::MAX)?;
        if self.published && self.content.trim().is_empty() {
            return Err(ValidationError::new(
                "content",
                "content cannot be empty when published",
            ));
        }
        if self.user_id == 0 {
            return Err(ValidationError::new(
                "user_id",
                "user_id must be greater than 0",
            ));
        }
        Ok(())
    }
}
