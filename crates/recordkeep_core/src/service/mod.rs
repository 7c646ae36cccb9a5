//! Record-type use-case services.
//!
//! # Responsibility
//! - Wrap shared stores in record-shaped APIs for request handlers.
//! - Keep transport layers decoupled from the generic store surface.

pub mod message_service;
pub mod task_service;
pub mod user_service;
