use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::infrastructure::AppState;
use crate::services::purchase_service::{self, ServiceError};

/// POST /api/buy/:id - Buy one unit of a product
#[utoipa::path(
    post,
    path = "/api/buy/{id}",
    params(("id" = String, Path, description = "Product id, a positive integer")),
    responses(
        (status = 200, description = "Purchase committed, or refused because the product is out of stock"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Unknown product"),
        (status = 500, description = "Store failure, nothing was changed")
    )
)]
pub async fn buy(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match purchase_service::purchase(state.purchase_repo.as_ref(), &id).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "purchase completed",
                "new_stock": receipt.new_stock
            })),
        ),
        Err(ServiceError::OutOfStock) => (
            StatusCode::OK,
            Json(json!({
                "success": false,
                "message": "out of stock"
            })),
        ),
        Err(ServiceError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "not found"
            })),
        ),
        Err(ServiceError::InvalidInput(msg)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": msg
            })),
        ),
        Err(ServiceError::StoreFailure(msg)) => {
            tracing::error!("Purchase of '{}' failed: {}", id, msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "purchase failed, please try again"
                })),
            )
        }
    }
}
