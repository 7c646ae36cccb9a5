//! Store-owned record envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier. Positive, starts at 1, never reused.
pub type RecordId = u64;

/// One stored entity: caller fields wrapped with store-owned metadata.
///
/// Serialized flat, so a task renders as
/// `{"id":1,"title":..,"description":..,"done":..,"created_at":..,"updated_at":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<V> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: V,
    /// Fixed when the record is created.
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` until the first successful update.
    pub updated_at: DateTime<Utc>,
}

impl<V> Record<V> {
    pub(crate) fn new(id: RecordId, fields: V, now: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the domain fields, keeping identity and creation time.
    pub(crate) fn replace_fields(&mut self, fields: V, now: DateTime<Utc>) {
        self.fields = fields;
        self.updated_at = now;
    }

    /// Returns whether the record was changed after creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}
