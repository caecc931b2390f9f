//! In-memory implementation of the store traits
//!
//! Holds products and the transaction log behind one lock, so a purchase is
//! atomic here too. Used to exercise services and handlers without SQLite.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    DomainError, NewProduct, Product, ProductId, ProductRepository, PurchaseOutcome,
    PurchaseRepository, TransactionEntry, TransactionRepository, purchase_message,
};
use crate::seed::CATALOG;

#[derive(Debug, Clone)]
struct StoredTransaction {
    id: i32,
    product_id: i32,
    timestamp: String,
    message: String,
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    transactions: Vec<StoredTransaction>,
}

impl Inner {
    fn insert_product(&mut self, input: NewProduct) -> Product {
        let id = self.products.last().map_or(1, |p| p.id + 1);
        let product = Product {
            id,
            name: input.name,
            year: input.year,
            price: input.price,
            stock: input.stock,
            serial_number: input.serial_number,
        };
        self.products.push(product.clone());
        product
    }

    fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id.get())
    }

    fn decrement(&mut self, id: ProductId) -> bool {
        match self.product_mut(id) {
            Some(product) if product.stock > 0 => {
                product.stock -= 1;
                true
            }
            _ => false,
        }
    }

    fn append(&mut self, product_id: i32, message: String) -> Result<TransactionEntry, DomainError> {
        if !self.products.iter().any(|p| p.id == product_id) {
            return Err(DomainError::Database(format!(
                "FOREIGN KEY constraint failed: product {}",
                product_id
            )));
        }
        let id = self.transactions.last().map_or(1, |t| t.id + 1);
        let record = StoredTransaction {
            id,
            product_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            message,
        };
        self.transactions.push(record.clone());
        Ok(self.entry(record))
    }

    fn entry(&self, record: StoredTransaction) -> TransactionEntry {
        let product = self.products.iter().find(|p| p.id == record.product_id);
        TransactionEntry {
            id: record.id,
            product_id: record.product_id,
            timestamp: record.timestamp,
            message: record.message,
            product_name: product.map(|p| p.name.clone()),
            product_price: product.map(|p| p.price),
            product_serial_number: product.map(|p| p.serial_number.clone()),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the starter catalog, ids 1..=7
    pub fn with_catalog() -> Self {
        let mut inner = Inner::default();
        for seed in CATALOG.iter() {
            inner.insert_product(seed.to_new_product());
        }
        Self {
            inner: Mutex::new(inner),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn find_available(&self) -> Result<Vec<Product>, DomainError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .products
            .iter()
            .filter(|p| p.is_available())
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let inner = self.inner.lock().await;
        Ok(inner.products.iter().find(|p| p.id == id.get()).cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        Ok(self.inner.lock().await.insert_product(product))
    }

    async fn decrement_stock(&self, id: ProductId) -> Result<bool, DomainError> {
        Ok(self.inner.lock().await.decrement(id))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.inner.lock().await.products.len() as u64)
    }
}

#[async_trait]
impl TransactionRepository for InMemoryStore {
    async fn append(&self, product_id: i32, message: String) -> Result<TransactionEntry, DomainError> {
        self.inner.lock().await.append(product_id, message)
    }

    async fn list_all(&self) -> Result<Vec<TransactionEntry>, DomainError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .transactions
            .iter()
            .rev()
            .map(|t| inner.entry(t.clone()))
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.inner.lock().await.transactions.len() as u64)
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryStore {
    async fn purchase(&self, id: ProductId) -> Result<PurchaseOutcome, DomainError> {
        let mut inner = self.inner.lock().await;

        let Some(product) = inner.products.iter().find(|p| p.id == id.get()).cloned() else {
            return Ok(PurchaseOutcome::NotFound);
        };
        if !product.is_available() {
            return Ok(PurchaseOutcome::OutOfStock);
        }

        // Log first: if that fails nothing has been touched yet
        inner.append(product.id, purchase_message(&product))?;
        let taken = inner.decrement(id);
        debug_assert!(taken, "stock checked under the same lock");

        let new_stock = product.stock - 1;
        Ok(PurchaseOutcome::Purchased {
            product: Product {
                stock: new_stock,
                ..product
            },
            new_stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn id(raw: i64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_catalog_matches_seed() {
        let store = InMemoryStore::with_catalog();
        assert_eq!(ProductRepository::count(&store).await.unwrap(), 7);

        let available: Vec<i32> = store
            .find_available()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(available, vec![1, 2, 4, 6, 7]);
    }

    #[tokio::test]
    async fn test_purchase_logs_with_snapshot_message() {
        let store = InMemoryStore::with_catalog();

        let outcome = store.purchase(id(6)).await.unwrap();
        assert!(matches!(outcome, PurchaseOutcome::Purchased { new_stock: 9, .. }));

        let log = store.list_all().await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].product_id, 6);
        assert_eq!(log[0].message, "Purchased Clavier Zeta for 89.99");
    }

    #[tokio::test]
    async fn test_concurrent_purchases_of_last_unit() {
        let store = Arc::new(InMemoryStore::new());
        let product = store
            .create(NewProduct {
                name: "Dernier".to_string(),
                year: 2024,
                price: 10.0,
                stock: 1,
                serial_number: "SN-LAST".to_string(),
            })
            .await
            .unwrap();
        let product_id = id(product.id as i64);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.purchase(product_id).await })
            })
            .collect();

        let mut purchased = 0;
        for handle in handles {
            if let PurchaseOutcome::Purchased { .. } = handle.await.unwrap().unwrap() {
                purchased += 1;
            }
        }

        assert_eq!(purchased, 1);
        assert_eq!(TransactionRepository::count(&*store).await.unwrap(), 1);
        assert_eq!(store.find_by_id(product_id).await.unwrap().unwrap().stock, 0);
    }
}
