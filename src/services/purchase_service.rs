//! Purchase Service - buying one unit of a product
//!
//! Validates the raw id before any store access, then hands the atomic
//! look-up/decrement/log unit to the PurchaseRepository.

use serde::Serialize;

use crate::domain::{DomainError, ProductId, PurchaseOutcome, PurchaseRepository};

/// Error type for purchase operations
#[derive(Debug)]
pub enum ServiceError {
    /// The id was not a positive integer; the store was not touched
    InvalidInput(String),
    NotFound,
    /// A normal business outcome, reported to the buyer
    OutOfStock,
    /// The store failed; the purchase was rolled back
    StoreFailure(String),
}

impl From<DomainError> for ServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => ServiceError::InvalidInput(msg),
            DomainError::NotFound => ServiceError::NotFound,
            other => ServiceError::StoreFailure(other.to_string()),
        }
    }
}

/// Confirmation of a committed purchase
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct PurchaseReceipt {
    pub product_id: i32,
    pub product_name: String,
    pub new_stock: i32,
}

/// Buy one unit of the product identified by `raw_id`.
pub async fn purchase(
    repo: &dyn PurchaseRepository,
    raw_id: &str,
) -> Result<PurchaseReceipt, ServiceError> {
    let id = ProductId::parse(raw_id)?;

    match repo.purchase(id).await? {
        PurchaseOutcome::Purchased { product, new_stock } => {
            tracing::info!(
                product_id = product.id,
                new_stock,
                "Purchased one unit of {}",
                product.name
            );
            Ok(PurchaseReceipt {
                product_id: product.id,
                product_name: product.name,
                new_stock,
            })
        }
        PurchaseOutcome::OutOfStock => {
            tracing::debug!(product_id = id.get(), "Purchase refused: out of stock");
            Err(ServiceError::OutOfStock)
        }
        PurchaseOutcome::NotFound => Err(ServiceError::NotFound),
    }
}
