//! User fields.
//!
//! Names are trimmed and emails trimmed + lowercased by `UserFields::new`
//! and `UserPatch::apply_to`, so two spellings of one address end up stored
//! identically. Validation checks the trimmed value but never rewrites it:
//! a `UserFields` built by struct literal is stored exactly as given.

use crate::error::ValidationError;
use crate::validation::{require_email, require_len, Validate};
use serde::{Deserialize, Serialize};

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 50;

/// Build through [`UserFields::new`] to get normalized values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
}

impl UserFields {
    pub fn new(name: impl AsRef<str>, email: impl AsRef<str>) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            email: normalize_email(email.as_ref()),
        }
    }
}

impl Validate for UserFields {
    fn validate(&self) -> Result<(), ValidationError> {
        require_len("name", &self.name, MIN_NAME_CHARS, MAX_NAME_CHARS)?;
        require_email("email", &self.email)
    }
}

/// Partial user update; `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Applies present values onto `fields`, normalizing them the same way
    /// `UserFields::new` does.
    pub fn apply_to(&self, fields: &mut UserFields) {
        if let Some(name) = &self.name {
            fields.name = normalize_name(name);
        }
        if let Some(email) = &self.email {
            fields.email = normalize_email(email);
        }
    }
}

pub(crate) fn normalize_name(value: &str) -> String {
    value.trim().to_string()
}

pub(crate) fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{UserFields, UserPatch};
    use crate::validation::Validate;

    #[test]
    fn constructor_normalizes_name_and_email() {
        let fields = UserFields::new("  Ada Lovelace ", " Ada@Example.COM ");
        assert_eq!(fields.name, "Ada Lovelace");
        assert_eq!(fields.email, "ada@example.com");
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn name_bounds_and_email_format_are_enforced() {
        let short = UserFields::new("A", "a@example.com").validate().unwrap_err();
        assert_eq!(short.reason(), "name must be at least 2 characters");

        let long = UserFields::new("x".repeat(51), "a@example.com")
            .validate()
            .unwrap_err();
        assert_eq!(long.reason(), "name cannot exceed 50 characters");

        let bad = UserFields::new("Ada", "not-an-email").validate().unwrap_err();
        assert_eq!(bad.reason(), "invalid email format");
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut fields = UserFields::new("Ada", "ada@example.com");
        let patch = UserPatch {
            email: Some(" ADA@NEW.ORG".to_string()),
            ..UserPatch::default()
        };
        patch.apply_to(&mut fields);
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.email, "ada@new.org");
        assert!(UserPatch::default().is_empty());
    }
}
