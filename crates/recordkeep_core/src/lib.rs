//! Core record stores for recordkeep.
//! This crate owns the in-memory tables and every rule that gates them.

pub mod cancel;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use cancel::{CancelReason, CancelSignal, CancelToken};
pub use error::{StoreError, StoreErrorKind, StoreResult, ValidationError};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LogDestination};
pub use model::message::MessageFields;
pub use model::post::PostFields;
pub use model::record::{Record, RecordId};
pub use model::task::TaskFields;
pub use model::user::{UserFields, UserPatch};
pub use service::message_service::{MessageRecord, MessageService, MessageStore};
pub use service::task_service::{TaskRecord, TaskService, TaskStore};
pub use service::user_service::{UserRecord, UserService, UserStore};
pub use store::{EntityStore, StoreBuilder};
pub use validation::{FieldRules, Validate, Validator};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
