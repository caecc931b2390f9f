use sea_orm::*;

use crate::domain::NewProduct;
use crate::models::product;

/// One entry of the starter catalog
#[derive(Debug, Clone, Copy)]
pub struct SeedProduct {
    pub name: &'static str,
    pub year: i32,
    pub price: f64,
    pub stock: i32,
    pub serial_number: &'static str,
}

impl SeedProduct {
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            name: self.name.to_string(),
            year: self.year,
            price: self.price,
            stock: self.stock,
            serial_number: self.serial_number.to_string(),
        }
    }
}

/// Starter catalog, inserted in this order (ids 1..=7 on an empty database).
/// Two entries start out of stock.
pub const CATALOG: [SeedProduct; 7] = [
    SeedProduct { name: "Smartphone Alpha", year: 2023, price: 699.99, stock: 25, serial_number: "SN123456" },
    SeedProduct { name: "Ordinateur Portable Beta", year: 2024, price: 1299.99, stock: 15, serial_number: "SN234567" },
    SeedProduct { name: "Tablette Gamma", year: 2022, price: 399.99, stock: 0, serial_number: "SN345678" },
    SeedProduct { name: "Montre Connectée Delta", year: 2023, price: 199.99, stock: 60, serial_number: "SN456789" },
    SeedProduct { name: "Casque Audio Epsilon", year: 2024, price: 149.99, stock: 0, serial_number: "SN567890" },
    SeedProduct { name: "Clavier Zeta", year: 2023, price: 89.99, stock: 10, serial_number: "SN678901" },
    SeedProduct { name: "Souris Eta", year: 2022, price: 49.99, stock: 5, serial_number: "SN789012" },
];

/// Insert the starter catalog if the products table is empty.
/// Returns the number of products inserted.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<usize, DbErr> {
    let txn = db.begin().await?;

    let existing = product::Entity::find().count(&txn).await?;
    if existing > 0 {
        tracing::debug!("Catalog already holds {} products, skipping seed", existing);
        txn.rollback().await?;
        return Ok(0);
    }

    let rows = CATALOG.iter().map(|p| product::ActiveModel {
        name: Set(p.name.to_owned()),
        year: Set(p.year),
        price: Set(p.price),
        stock: Set(p.stock),
        serial_number: Set(p.serial_number.to_owned()),
        ..Default::default()
    });
    product::Entity::insert_many(rows).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!("Seeded catalog with {} products", CATALOG.len());
    Ok(CATALOG.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    #[tokio::test]
    async fn test_seed_only_runs_on_empty_table() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");

        assert_eq!(seed_catalog(&db).await.unwrap(), 7);
        assert_eq!(seed_catalog(&db).await.unwrap(), 0);

        let count = product::Entity::find().count(&db).await.unwrap();
        assert_eq!(count, 7);
    }

    #[tokio::test]
    async fn test_seed_assigns_ids_in_catalog_order() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");
        seed_catalog(&db).await.unwrap();

        let tablet = product::Entity::find_by_id(3).one(&db).await.unwrap().unwrap();
        assert_eq!(tablet.name, "Tablette Gamma");
        assert_eq!(tablet.stock, 0);
    }
}
