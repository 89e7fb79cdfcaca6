//! Core use-case services.
//!
//! # Responsibility
//! - Combine search and reminder primitives into page-level operations.
//! - Keep the web layer decoupled from store details.

pub mod reminder_service;
pub mod search_service;
