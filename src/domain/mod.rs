//! Domain layer - Pure business abstractions
//!
//! This layer contains NO web framework dependencies (no Axum).
//! Trait definitions, domain types, input validation and error types.

pub mod errors;
pub mod repositories;
pub mod validation;

pub use errors::{DomainError, FieldError};
pub use repositories::*;
pub use validation::{NewProductForm, ProductId};
