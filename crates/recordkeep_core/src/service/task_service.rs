//! Task use-case service.
//!
//! # Responsibility
//! - Provide task-shaped entry points over a shared task store.
//! - Express the done-status filter used by task listing.
//!
//! # Invariants
//! - Service APIs never bypass store validation.
//! - `update_task` replaces all domain fields; `set_done` touches only `done`.

use crate::error::StoreResult;
use crate::model::record::{Record, RecordId};
use crate::model::task::TaskFields;
use crate::store::EntityStore;
use std::sync::Arc;

pub type TaskRecord = Record<TaskFields>;
pub type TaskStore = EntityStore<TaskFields>;

/// Use-case wrapper for task CRUD.
#[derive(Debug, Clone)]
pub struct TaskService {
    store: Arc<TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<TaskStore> {
        &self.store
    }

    /// Creates an open task.
    pub fn add_task(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<TaskRecord> {
        self.store.create(TaskFields::new(title, description))
    }

    pub fn update_task(
        &self,
        id: RecordId,
        title: impl Into<String>,
        description: impl Into<String>,
        done: bool,
    ) -> StoreResult<TaskRecord> {
        let fields = TaskFields {
            title: title.into(),
            description: description.into(),
            done,
        };
        self.store.update(id, fields)
    }

    pub fn set_done(&self, id: RecordId, done: bool) -> StoreResult<TaskRecord> {
        self.store.modify(id, |fields| fields.done = done)
    }

    pub fn get_task(&self, id: RecordId) -> StoreResult<TaskRecord> {
        self.store.get(id)
    }

    pub fn delete_task(&self, id: RecordId) -> StoreResult<()> {
        self.store.delete(id)
    }

    /// Lists tasks, optionally only those whose `done` equals `filter_done`.
    pub fn list_tasks(&self, filter_done: Option<bool>) -> Vec<TaskRecord> {
        match filter_done {
            None => self.store.list(),
            Some(done) => self.store.list_where(|record| record.fields.done == done),
        }
    }
}
