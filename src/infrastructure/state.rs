//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ProductRepository, PurchaseRepository, TransactionRepository};
use crate::infrastructure::{
    InMemoryStore, SeaOrmProductRepository, SeaOrmPurchaseRepository, SeaOrmTransactionRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Product catalog
    pub product_repo: Arc<dyn ProductRepository>,
    /// Transaction log
    pub transaction_repo: Arc<dyn TransactionRepository>,
    /// Atomic purchase unit
    pub purchase_repo: Arc<dyn PurchaseRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories backed by the database
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            product_repo: Arc::new(SeaOrmProductRepository::new(db.clone())),
            transaction_repo: Arc::new(SeaOrmTransactionRepository::new(db.clone())),
            purchase_repo: Arc::new(SeaOrmPurchaseRepository::new(db)),
        }
    }

    /// Every repository served by the same in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            product_repo: store.clone(),
            transaction_repo: store.clone(),
            purchase_repo: store,
        }
    }
}
