//! SeaORM implementation of PurchaseRepository
//!
//! A purchase is one database transaction: read the product, take one unit
//! with a conditional update, append the log record, then commit. Any error
//! rolls the whole unit back.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, TransactionTrait};

use super::product_repository::decrement_stock_on;
use super::transaction_repository::append_on;
use crate::domain::{
    DomainError, Product, ProductId, PurchaseOutcome, PurchaseRepository, purchase_message,
};
use crate::models::product::Entity as ProductEntity;

pub struct SeaOrmPurchaseRepository {
    db: DatabaseConnection,
}

impl SeaOrmPurchaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn purchase_in(txn: &DatabaseTransaction, id: ProductId) -> Result<PurchaseOutcome, DbErr> {
    let Some(model) = ProductEntity::find_by_id(id.get()).one(txn).await? else {
        return Ok(PurchaseOutcome::NotFound);
    };

    if model.stock < 1 {
        return Ok(PurchaseOutcome::OutOfStock);
    }

    // Another buyer may have taken the last unit since the read above
    if !decrement_stock_on(txn, id).await? {
        return Ok(PurchaseOutcome::OutOfStock);
    }

    let product = Product::from(model);
    append_on(txn, product.id, purchase_message(&product)).await?;

    let new_stock = ProductEntity::find_by_id(id.get())
        .one(txn)
        .await?
        .map(|p| p.stock)
        .ok_or_else(|| DbErr::RecordNotFound(format!("product {} vanished mid-purchase", id)))?;

    Ok(PurchaseOutcome::Purchased {
        product: Product {
            stock: new_stock,
            ..product
        },
        new_stock,
    })
}

#[async_trait]
impl PurchaseRepository for SeaOrmPurchaseRepository {
    async fn purchase(&self, id: ProductId) -> Result<PurchaseOutcome, DomainError> {
        let txn = self.db.begin().await?;

        match purchase_in(&txn, id).await {
            Ok(outcome @ PurchaseOutcome::Purchased { .. }) => {
                txn.commit().await?;
                Ok(outcome)
            }
            Ok(outcome) => {
                txn.rollback().await?;
                Ok(outcome)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Rollback of purchase {} failed: {}", id, rollback_err);
                }
                Err(e.into())
            }
        }
    }
}
