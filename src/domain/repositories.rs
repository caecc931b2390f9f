//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, ProductId};

/// Product data for API responses
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub year: i32,
    pub price: f64,
    pub stock: i32,
    pub serial_number: String,
}

impl Product {
    pub fn is_available(&self) -> bool {
        self.stock >= 1
    }
}

/// Validated input for creating a product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub year: i32,
    pub price: f64,
    pub stock: i32,
    pub serial_number: String,
}

/// A logged purchase joined with the product it references.
///
/// `message` is the snapshot written at purchase time. The `product_*` fields
/// are read from the product row when the log is listed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, utoipa::ToSchema)]
pub struct TransactionEntry {
    pub id: i32,
    pub product_id: i32,
    pub timestamp: String,
    pub message: String,
    pub product_name: Option<String>,
    pub product_price: Option<f64>,
    pub product_serial_number: Option<String>,
}

/// Result of one purchase attempt that reached the store
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    /// Stock was decremented and the transaction logged, both committed
    Purchased { product: Product, new_stock: i32 },
    /// The product exists but has no stock left; nothing changed
    OutOfStock,
    /// No product with that id; nothing changed
    NotFound,
}

/// Message logged with a purchase of `product`.
pub fn purchase_message(product: &Product) -> String {
    format!("Purchased {} for {:.2}", product.name, product.price)
}

/// Repository trait for the product catalog
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find all products with at least one unit in stock, in id order
    async fn find_available(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    /// Create a new product and return it with its assigned id
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError>;

    /// Remove one unit of stock. Returns false when no row was changed
    /// (unknown id or stock already at zero).
    async fn decrement_stock(&self, id: ProductId) -> Result<bool, DomainError>;

    /// Count all products, available or not
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository trait for the append-only transaction log
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Append one record for a purchase of `product_id`
    async fn append(&self, product_id: i32, message: String) -> Result<TransactionEntry, DomainError>;

    /// List every transaction, newest first
    async fn list_all(&self) -> Result<Vec<TransactionEntry>, DomainError>;

    /// Count all transactions
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Runs a whole purchase as one atomic unit: look up, decrement, log.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn purchase(&self, id: ProductId) -> Result<PurchaseOutcome, DomainError>;
}
