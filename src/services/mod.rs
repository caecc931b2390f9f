//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Services work against the repository traits, so any store can back them.

pub mod catalog_service;
pub mod purchase_service;

// Re-export for convenience
pub use purchase_service::PurchaseReceipt;
