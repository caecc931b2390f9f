//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, NewProduct, Product, ProductId, ProductRepository};
use crate::models::product::{self, ActiveModel, Entity as ProductEntity};

/// Take one unit of stock from `id`, but only while some remains.
///
/// A single conditional UPDATE, so two concurrent buyers of the last unit
/// cannot both succeed. Works on a plain connection or inside a transaction.
pub(crate) async fn decrement_stock_on<C: ConnectionTrait>(
    conn: &C,
    id: ProductId,
) -> Result<bool, DbErr> {
    let result = ProductEntity::update_many()
        .col_expr(
            product::Column::Stock,
            Expr::col(product::Column::Stock).sub(1),
        )
        .filter(product::Column::Id.eq(id.get()))
        .filter(product::Column::Stock.gt(0))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}

/// SeaORM-based implementation of ProductRepository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_available(&self) -> Result<Vec<Product>, DomainError> {
        let products = ProductEntity::find()
            .filter(product::Column::Stock.gte(1))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;

        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let product = ProductEntity::find_by_id(id.get()).one(&self.db).await?;
        Ok(product.map(Product::from))
    }

    async fn create(&self, input: NewProduct) -> Result<Product, DomainError> {
        let product = ActiveModel {
            name: Set(input.name),
            year: Set(input.year),
            price: Set(input.price),
            stock: Set(input.stock),
            serial_number: Set(input.serial_number),
            ..Default::default()
        };

        let result = product.insert(&self.db).await?;
        tracing::info!("Created product {} ({})", result.id, result.name);

        Ok(Product::from(result))
    }

    async fn decrement_stock(&self, id: ProductId) -> Result<bool, DomainError> {
        Ok(decrement_stock_on(&self.db, id).await?)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(ProductEntity::find().count(&self.db).await?)
    }
}
