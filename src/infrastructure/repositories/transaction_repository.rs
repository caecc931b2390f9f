//! SeaORM implementation of TransactionRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, Set,
};

use crate::domain::{DomainError, TransactionEntry, TransactionRepository};
use crate::models::product;
use crate::models::transaction::{self, ActiveModel, Entity as TransactionEntity};

/// Insert one log record stamped with the current time.
pub(crate) async fn append_on<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
    message: String,
) -> Result<transaction::Model, DbErr> {
    let record = ActiveModel {
        product_id: Set(product_id),
        timestamp: Set(chrono::Utc::now().to_rfc3339()),
        message: Set(message),
        ..Default::default()
    };

    record.insert(conn).await
}

fn to_entry(record: transaction::Model, product: Option<product::Model>) -> TransactionEntry {
    TransactionEntry {
        id: record.id,
        product_id: record.product_id,
        timestamp: record.timestamp,
        message: record.message,
        product_name: product.as_ref().map(|p| p.name.clone()),
        product_price: product.as_ref().map(|p| p.price),
        product_serial_number: product.map(|p| p.serial_number),
    }
}

/// SeaORM-based implementation of TransactionRepository
pub struct SeaOrmTransactionRepository {
    db: DatabaseConnection,
}

impl SeaOrmTransactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionRepository for SeaOrmTransactionRepository {
    async fn append(&self, product_id: i32, message: String) -> Result<TransactionEntry, DomainError> {
        let record = append_on(&self.db, product_id, message).await?;
        let product = product::Entity::find_by_id(record.product_id)
            .one(&self.db)
            .await?;

        Ok(to_entry(record, product))
    }

    async fn list_all(&self) -> Result<Vec<TransactionEntry>, DomainError> {
        let rows = TransactionEntity::find()
            .find_also_related(product::Entity)
            // ids grow with insertion, so this is newest first
            .order_by_desc(transaction::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(record, product)| to_entry(record, product))
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(TransactionEntity::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::seed::seed_catalog;

    #[tokio::test]
    async fn test_list_all_is_newest_first_with_product_fields() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");
        seed_catalog(&db).await.unwrap();
        let repo = SeaOrmTransactionRepository::new(db);

        repo.append(1, "first".to_string()).await.unwrap();
        repo.append(6, "second".to_string()).await.unwrap();

        let entries = repo.list_all().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "second");
        assert_eq!(entries[0].product_id, 6);
        assert_eq!(entries[0].product_name.as_deref(), Some("Clavier Zeta"));
        assert_eq!(entries[0].product_serial_number.as_deref(), Some("SN678901"));
        assert_eq!(entries[1].message, "first");
        assert_eq!(entries[1].product_price, Some(699.99));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_append_rejects_unknown_product() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");
        let repo = SeaOrmTransactionRepository::new(db);

        let res = repo.append(42, "ghost".to_string()).await;
        assert!(matches!(res, Err(DomainError::Database(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
