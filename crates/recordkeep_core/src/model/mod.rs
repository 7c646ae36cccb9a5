//! Record envelope and the concrete field types stored by this crate.
//!
//! # Responsibility
//! - Define the store-owned envelope (`id`, timestamps) around caller fields.
//! - Define the per-table field shapes and their domain rules.
//!
//! # Invariants
//! - `id` and `created_at` are assigned by a store and never change.
//! - Field constructors normalize input; validation itself stays pure.

pub mod message;
pub mod post;
pub mod record;
pub mod task;
pub mod user;
