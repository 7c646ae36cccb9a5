//! Validation contract applied before every store mutation.
//!
//! # Responsibility
//! - Define the pure predicate shape injected into a store.
//! - Provide shared field rules reused by the concrete record types.
//!
//! # Invariants
//! - Validators never mutate input and never consult store state.
//! - The same validator gates both create and update paths.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::marker::PhantomData;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Domain rules carried by a field type itself.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validation strategy injected into a store at construction.
pub trait Validator<V>: Send + Sync {
    fn validate(&self, fields: &V) -> Result<(), ValidationError>;
}

impl<V, F> Validator<V> for F
where
    F: Fn(&V) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, fields: &V) -> Result<(), ValidationError> {
        self(fields)
    }
}

/// Validator that delegates to the field type's own `Validate` impl.
pub struct FieldRules<V>(PhantomData<fn(&V)>);

impl<V> FieldRules<V> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<V> Default for FieldRules<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validate> Validator<V> for FieldRules<V> {
    fn validate(&self, fields: &V) -> Result<(), ValidationError> {
        fields.validate()
    }
}

/// Rejects values that are empty after trimming.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            format!("{field} cannot be empty"),
        ));
    }
    Ok(())
}

/// Enforces an inclusive character-count window on the trimmed value.
pub fn require_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let count = value.trim().chars().count();
    if count < min {
        return Err(ValidationError::new(
            field,
            format!("{field} must be at least {min} characters"),
        ));
    }
    if count > max {
        return Err(ValidationError::new(
            field,
            format!("{field} cannot exceed {max} characters"),
        ));
    }
    Ok(())
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    require_non_empty(field, trimmed)?;
    if !EMAIL_RE.is_match(trimmed) {
        return Err(ValidationError::new(field, "invalid email format"));
    }
    Ok(())
}
