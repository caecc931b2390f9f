use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Manufacture or release year
    pub year: i32,
    pub price: f64,
    /// Units on hand. Never negative (CHECK constraint on the table).
    pub stock: i32,
    pub serial_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            year: model.year,
            price: model.price,
            stock: model.stock,
            serial_number: model.serial_number,
        }
    }
}
