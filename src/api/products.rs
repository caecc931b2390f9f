//! Catalog API handlers using repository pattern

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::{NewProductForm, Product};
use crate::infrastructure::AppState;
use crate::services::catalog_service::{self, ServiceError};

fn error_response(e: ServiceError) -> Response {
    match e {
        ServiceError::InvalidInput(msg) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
        }
        ServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Product not found" })),
        )
            .into_response(),
        ServiceError::Validation(fields) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Invalid product form",
                "fields": fields
            })),
        )
            .into_response(),
        ServiceError::StoreFailure(msg) => {
            tracing::error!("Catalog store failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Products with at least one unit in stock")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    match catalog_service::list_available(state.product_repo.as_ref()).await {
        Ok(products) => Json(json!({
            "total": products.len(),
            "products": products
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id, a positive integer")),
    responses(
        (status = 200, description = "Product detail", body = Product),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Unknown product")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match catalog_service::get_product(state.product_repo.as_ref(), &id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Admin form submission. Fields arrive as text and are validated together.
#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body(content = NewProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "One or more fields rejected")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Form(form): Form<NewProductForm>,
) -> impl IntoResponse {
    match catalog_service::create_product(state.product_repo.as_ref(), &form).await {
        Ok(product) => (
            StatusCode::CREATED,
            Json(json!({
                "id": product.id,
                "product": product
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
