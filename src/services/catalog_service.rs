//! Catalog Service - product listing, detail, admin creation and the
//! transaction log listing

use crate::domain::{
    DomainError, FieldError, NewProductForm, Product, ProductId, ProductRepository,
    TransactionEntry, TransactionRepository,
};

/// Error type for catalog operations
#[derive(Debug)]
pub enum ServiceError {
    InvalidInput(String),
    NotFound,
    Validation(Vec<FieldError>),
    StoreFailure(String),
}

impl From<DomainError> for ServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => ServiceError::InvalidInput(msg),
            DomainError::NotFound => ServiceError::NotFound,
            DomainError::Validation(fields) => ServiceError::Validation(fields),
            other => ServiceError::StoreFailure(other.to_string()),
        }
    }
}

/// Products with at least one unit in stock
pub async fn list_available(repo: &dyn ProductRepository) -> Result<Vec<Product>, ServiceError> {
    Ok(repo.find_available().await?)
}

/// Product detail. Malformed ids are rejected before lookup.
pub async fn get_product(
    repo: &dyn ProductRepository,
    raw_id: &str,
) -> Result<Product, ServiceError> {
    let id = ProductId::parse(raw_id)?;
    repo.find_by_id(id).await?.ok_or(ServiceError::NotFound)
}

/// Validate an admin form and insert the product
pub async fn create_product(
    repo: &dyn ProductRepository,
    form: &NewProductForm,
) -> Result<Product, ServiceError> {
    let input = form.validate()?;
    Ok(repo.create(input).await?)
}

/// Every logged purchase, newest first
pub async fn list_transactions(
    repo: &dyn TransactionRepository,
) -> Result<Vec<TransactionEntry>, ServiceError> {
    Ok(repo.list_all().await?)
}
