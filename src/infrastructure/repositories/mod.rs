//! Repository implementations using SeaORM, plus an in-memory store

pub mod memory_repository;
pub mod product_repository;
pub mod purchase_repository;
pub mod transaction_repository;

pub use memory_repository::InMemoryStore;
pub use product_repository::SeaOrmProductRepository;
pub use purchase_repository::SeaOrmPurchaseRepository;
pub use transaction_repository::SeaOrmTransactionRepository;
