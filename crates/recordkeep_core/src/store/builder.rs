//! Construction-time configuration for `EntityStore`.

use crate::cancel::{CancelSignal, CancelToken};
use crate::store::EntityStore;
use crate::validation::{FieldRules, Validator};
use std::marker::PhantomData;
use std::sync::Arc;

pub(crate) const DEFAULT_STORE_NAME: &str = "records";

/// Builder for an `EntityStore`.
///
/// Without an explicit `validator`, the field type's own `Validate` impl is
/// used, so `build` only compiles when `V: Validate`.
pub struct StoreBuilder<V, R = FieldRules<V>> {
    name: String,
    validator: R,
    cancel: Option<Arc<dyn CancelSignal>>,
    _fields: PhantomData<fn(&V)>,
}

impl<V> StoreBuilder<V> {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            validator: FieldRules::new(),
            cancel: None,
            _fields: PhantomData,
        }
    }
}

impl<V> Default for StoreBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, R> StoreBuilder<V, R> {
    /// Label used in log lines. Blank input keeps the current name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            self.name = trimmed.to_string();
        }
        self
    }

    /// Replaces the validation strategy.
    pub fn validator<R2>(self, validator: R2) -> StoreBuilder<V, R2>
    where
        R2: Validator<V>,
    {
        StoreBuilder {
            name: self.name,
            validator,
            cancel: self.cancel,
            _fields: PhantomData,
        }
    }

    /// Associates an external cancellation source consulted before `create`.
    pub fn cancel_signal(mut self, signal: Arc<dyn CancelSignal>) -> Self {
        self.cancel = Some(signal);
        self
    }

    pub fn cancel_token(self, token: CancelToken) -> Self {
        self.cancel_signal(Arc::new(token))
    }

    pub fn build(self) -> EntityStore<V>
    where
        R: Validator<V> + 'static,
    {
        EntityStore::from_parts(self.name, Box::new(self.validator), self.cancel)
    }
}
