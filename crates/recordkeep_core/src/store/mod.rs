//! In-memory, thread-safe record stores.
//!
//! # Responsibility
//! - Own the id → record mapping and the identifier counter for one table.
//! - Gate every mutation behind the injected validator and, for creation,
//!   the optional cancellation signal.
//!
//! # Invariants
//! - Every key in the mapping equals the `id` of its record.
//! - The next identifier is strictly greater than any identifier ever issued.
//! - A rejected mutation leaves the mapping and the counter untouched.
//! - Mutations hold the exclusive guard; reads share it.

mod builder;
mod entity_store;

pub use builder::StoreBuilder;
pub use entity_store::EntityStore;
