//! Typed failures returned by record stores.
//!
//! # Responsibility
//! - Define the closed set of failure kinds a store operation can produce.
//! - Keep transport concerns (status codes, response bodies) out of core.
//!
//! # Invariants
//! - Every failure is a routine, recoverable outcome; nothing here is fatal.
//! - A `Validation` or `Cancelled` failure implies no state was mutated.

use crate::cancel::CancelReason;
use crate::model::record::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Domain rule violation for one field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: &'static str,
    reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable reason, suitable for returning to the caller as-is.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

impl Error for ValidationError {}

/// Coarse classification used by collaborators to pick a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    Validation,
    NotFound,
    Cancelled,
}

/// Error returned by every fallible store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ValidationError),
    NotFound(RecordId),
    Cancelled(CancelReason),
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::Validation(_) => StoreErrorKind::Validation,
            Self::NotFound(_) => StoreErrorKind::NotFound,
            Self::Cancelled(_) => StoreErrorKind::Cancelled,
        }
    }

    /// True for failures caused by caller input (bad fields, unknown id).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Cancelled(reason) => write!(f, "operation cancelled: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Cancelled(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
