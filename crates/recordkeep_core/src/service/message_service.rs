//! Chat message use-case service.

use crate::error::StoreResult;
use crate::model::message::MessageFields;
use crate::model::record::{Record, RecordId};
use crate::store::EntityStore;
use std::sync::Arc;

pub type MessageRecord = Record<MessageFields>;
pub type MessageStore = EntityStore<MessageFields>;

#[derive(Debug, Clone)]
pub struct MessageService {
    store: Arc<MessageStore>,
}

impl MessageService {
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<MessageStore> {
        &self.store
    }

    pub fn create_message(
        &self,
        username: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<MessageRecord> {
        self.store.create(MessageFields::new(username, content))
    }

    /// Replaces message content, keeping the author.
    ///
    /// The edited message goes through the same rules as a new one, so
    /// empty content is rejected here too.
    pub fn update_content(
        &self,
        id: RecordId,
        content: impl Into<String>,
    ) -> StoreResult<MessageRecord> {
        let content = content.into();
        self.store.modify(id, move |fields| fields.content = content)
    }

    pub fn get_message(&self, id: RecordId) -> StoreResult<MessageRecord> {
        self.store.get(id)
    }

    pub fn delete_message(&self, id: RecordId) -> StoreResult<()> {
        self.store.delete(id)
    }

    pub fn list_messages(&self) -> Vec<MessageRecord> {
        self.store.list()
    }

    /// Total number of stored messages.
    pub fn count(&self) -> usize {
        self.store.len()
    }
}
