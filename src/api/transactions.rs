use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::infrastructure::AppState;
use crate::services::catalog_service;

#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "Logged purchases, newest first")
    )
)]
pub async fn list_transactions(State(state): State<AppState>) -> impl IntoResponse {
    match catalog_service::list_transactions(state.transaction_repo.as_ref()).await {
        Ok(transactions) => Json(json!({
            "total": transactions.len(),
            "transactions": transactions
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to list transactions: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}
