//! User use-case service.
//!
//! # Responsibility
//! - Provide user-shaped entry points, including partial updates.
//!
//! # Invariants
//! - Partial updates are applied and validated under one exclusive guard, so
//!   concurrent patches to different fields of one user never lose a write.

use crate::error::StoreResult;
use crate::model::record::{Record, RecordId};
use crate::model::user::{UserFields, UserPatch};
use crate::store::EntityStore;
use std::sync::Arc;

pub type UserRecord = Record<UserFields>;
pub type UserStore = EntityStore<UserFields>;

#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    /// Creates a user from raw input; name and email are normalized first.
    pub fn add_user(&self, name: &str, email: &str) -> StoreResult<UserRecord> {
        self.store.create(UserFields::new(name, email))
    }

    /// Applies the present fields of `patch`.
    ///
    /// An empty patch still validates the stored fields and refreshes
    /// `updated_at`.
    pub fn update_user(&self, id: RecordId, patch: &UserPatch) -> StoreResult<UserRecord> {
        self.store.modify(id, |fields| patch.apply_to(fields))
    }

    pub fn rename(&self, id: RecordId, name: &str) -> StoreResult<UserRecord> {
        let patch = UserPatch {
            name: Some(name.to_string()),
            ..UserPatch::default()
        };
        self.update_user(id, &patch)
    }

    pub fn change_email(&self, id: RecordId, email: &str) -> StoreResult<UserRecord> {
        let patch = UserPatch {
            email: Some(email.to_string()),
            ..UserPatch::default()
        };
        self.update_user(id, &patch)
    }

    pub fn get_user(&self, id: RecordId) -> StoreResult<UserRecord> {
        self.store.get(id)
    }

    pub fn remove_user(&self, id: RecordId) -> StoreResult<()> {
        self.store.delete(id)
    }

    pub fn list_users(&self) -> Vec<UserRecord> {
        self.store.list()
    }
}
