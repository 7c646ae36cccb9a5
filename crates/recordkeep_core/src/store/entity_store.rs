//! Generic validated CRUD store over one record type.

use crate::cancel::CancelSignal;
use crate::error::{StoreError, StoreResult};
use crate::model::record::{Record, RecordId};
use crate::store::builder::StoreBuilder;
use crate::validation::{Validate, Validator};
use chrono::Utc;
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

const FIRST_RECORD_ID: RecordId = 1;

/// Thread-safe in-memory table keyed by store-assigned identifiers.
///
/// Share it as `Arc<EntityStore<V>>` between request handlers. Every method
/// takes `&self`; the internal reader/writer guard is released before any
/// method returns.
pub struct EntityStore<V> {
    name: String,
    state: RwLock<StoreState<V>>,
    validator: Box<dyn Validator<V>>,
    cancel: Option<Arc<dyn CancelSignal>>,
}

struct StoreState<V> {
    records: HashMap<RecordId, Record<V>>,
    next_id: RecordId,
}

impl<V: Validate + 'static> EntityStore<V> {
    /// Empty store validated by the field type's own rules.
    pub fn new() -> Self {
        StoreBuilder::new().build()
    }
}

impl<V: Validate + 'static> Default for EntityStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> EntityStore<V> {
    pub fn builder() -> StoreBuilder<V> {
        StoreBuilder::new()
    }

    /// Empty store gated by `validator` instead of the field type's rules.
    pub fn with_validator(validator: impl Validator<V> + 'static) -> Self {
        StoreBuilder::new().validator(validator).build()
    }

    pub(crate) fn from_parts(
        name: String,
        validator: Box<dyn Validator<V>>,
        cancel: Option<Arc<dyn CancelSignal>>,
    ) -> Self {
        Self {
            name,
            state: RwLock::new(StoreState {
                records: HashMap::new(),
                next_id: FIRST_RECORD_ID,
            }),
            validator,
            cancel,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.state.read().records.contains_key(&id)
    }

    /// Identifier the next successful `create` will assign.
    pub fn next_id(&self) -> RecordId {
        self.state.read().next_id
    }

    /// Removes the record with `id`.
    ///
    /// # Errors
    /// - `NotFound` when no live record has this id (including double delete).
    pub fn delete(&self, id: RecordId) -> StoreResult<()> {
        let removed = self.state.write().records.remove(&id);
        if removed.is_none() {
            return Err(StoreError::NotFound(id));
        }

        debug!(
            "event=record_deleted module=store status=ok store={} id={}",
            self.name, id
        );
        Ok(())
    }

    fn ensure_not_cancelled(&self) -> StoreResult<()> {
        match self.cancel.as_ref().and_then(|signal| signal.cancelled()) {
            Some(reason) => Err(StoreError::Cancelled(reason)),
            None => Ok(()),
        }
    }
}

impl<V: Clone> EntityStore<V> {
    /// Validates `fields` and inserts them under a fresh identifier.
    ///
    /// # Contract
    /// - Validation runs first, then the cancellation check, then the insert.
    /// - On success `id = next_id`, the counter advances by exactly one and
    ///   `created_at == updated_at == now`.
    ///
    /// # Errors
    /// - `Validation` when the validator rejects `fields`.
    /// - `Cancelled` when the associated signal already fired.
    pub fn create(&self, fields: V) -> StoreResult<Record<V>> {
        self.validator.validate(&fields)?;
        self.ensure_not_cancelled()?;

        let record = {
            let mut state = self.state.write();
            let id = state.next_id;
            state.next_id += 1;
            let record = Record::new(id, fields, Utc::now());
            state.records.insert(id, record.clone());
            record
        };

        debug!(
            "event=record_created module=store status=ok store={} id={}",
            self.name, record.id
        );
        Ok(record)
    }

    /// Returns a copy of the record with `id`.
    pub fn get(&self, id: RecordId) -> StoreResult<Record<V>> {
        self.state
            .read()
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces the domain fields of an existing record.
    ///
    /// `id` and `created_at` are preserved; `updated_at` is refreshed.
    ///
    /// # Errors
    /// - `Validation` first, before the record is looked up.
    /// - `NotFound` when `fields` are valid but no record has `id`.
    pub fn update(&self, id: RecordId, fields: V) -> StoreResult<Record<V>> {
        self.validator.validate(&fields)?;

        let updated = {
            let mut state = self.state.write();
            let record = state
                .records
                .get_mut(&id)
                .ok_or(StoreError::NotFound(id))?;
            record.replace_fields(fields, Utc::now());
            record.clone()
        };

        debug!(
            "event=record_updated module=store status=ok store={} id={}",
            self.name, id
        );
        Ok(updated)
    }

    /// Read-modify-write of one record under a single exclusive guard.
    ///
    /// `edit` works on a copy of the current fields; the copy is validated
    /// and committed only when valid. Keep `edit` short: other callers wait
    /// while it runs.
    ///
    /// # Errors
    /// - `NotFound` when no record has `id` (`edit` is not called).
    /// - `Validation` when the edited copy is rejected; the stored record is
    ///   left as it was.
    pub fn modify<F>(&self, id: RecordId, edit: F) -> StoreResult<Record<V>>
    where
        F: FnOnce(&mut V),
    {
        let updated = {
            let mut state = self.state.write();
            let record = state
                .records
                .get_mut(&id)
                .ok_or(StoreError::NotFound(id))?;
            let mut fields = record.fields.clone();
            edit(&mut fields);
            self.validator.validate(&fields)?;
            record.replace_fields(fields, Utc::now());
            record.clone()
        };

        debug!(
            "event=record_modified module=store status=ok store={} id={}",
            self.name, id
        );
        Ok(updated)
    }

    /// Snapshot of every live record, ordered by id.
    pub fn list(&self) -> Vec<Record<V>> {
        self.list_where(|_| true)
    }

    /// Snapshot of the records matching `predicate`, ordered by id.
    ///
    /// `predicate` runs under the shared guard. It must not call back into
    /// this store: a queued writer can block the nested read and deadlock.
    pub fn list_where<P>(&self, predicate: P) -> Vec<Record<V>>
    where
        P: Fn(&Record<V>) -> bool,
    {
        let mut records: Vec<Record<V>> = {
            let state = self.state.read();
            let matched = state
                .records
                .values()
                .filter(|record| predicate(record))
                .cloned()
                .collect();
            matched
        };
        records.sort_unstable_by_key(|record| record.id);
        records
    }
}

impl<V> Debug for EntityStore<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (len, next_id) = {
            let state = self.state.read();
            (state.records.len(), state.next_id)
        };
        f.debug_struct("EntityStore")
            .field("name", &self.name)
            .field("len", &len)
            .field("next_id", &next_id)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::EntityStore;
    use crate::error::{StoreError, ValidationError};
    use crate::model::task::TaskFields;

    #[test]
    fn ids_start_at_one_and_are_not_reused() {
        let store = EntityStore::<TaskFields>::new();
        assert_eq!(store.next_id(), 1);

        let first = store.create(TaskFields::new("a", "")).unwrap();
        store.delete(first.id).unwrap();
        let second = store.create(TaskFields::new("b", "")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn custom_validator_replaces_field_rules() {
        let store = EntityStore::<TaskFields>::with_validator(|fields: &TaskFields| {
            if fields.description.is_empty() {
                Err(ValidationError::new(
                    "description",
                    "description cannot be empty",
                ))
            } else {
                Ok(())
            }
        });

        let err = store.create(TaskFields::new("ok", "")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref v) if v.field() == "description"));
        assert!(store.create(TaskFields::new("", "still fine")).is_ok());
    }

    #[test]
    fn failed_modify_leaves_record_untouched() {
        let store = EntityStore::<TaskFields>::new();
        let created = store.create(TaskFields::new("keep", "")).unwrap();

        let err = store
            .modify(created.id, |fields| fields.title.clear())
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.get(created.id).unwrap(), created);
    }

    #[test]
    fn modify_on_missing_record_does_not_call_edit() {
        let store = EntityStore::<TaskFields>::new();
        let mut called = false;
        let err = store.modify(9, |_| called = true).unwrap_err();
        assert_eq!(err, StoreError::NotFound(9));
        assert!(!called);
    }

    #[test]
    fn debug_output_reports_metadata_only() {
        let store = EntityStore::<TaskFields>::builder().name("tasks").build();
        store.create(TaskFields::new("secret title", "")).unwrap();
        let rendered = format!("{store:?}");
        assert!(rendered.contains("tasks"));
        assert!(!rendered.contains("secret title"));
    }
}
