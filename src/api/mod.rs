pub mod greeting;
pub mod health;
pub mod products;
pub mod purchase;
pub mod transactions;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/hello/:name", get(greeting::hello))
        // Catalog
        .route("/products", get(products::list_products))
        .route("/products/:id", get(products::get_product))
        // Purchases
        .route("/buy/:id", post(purchase::buy))
        .route("/transactions", get(transactions::list_transactions))
        // Admin
        .route("/admin/products", post(products::create_product))
        .with_state(state)
}
