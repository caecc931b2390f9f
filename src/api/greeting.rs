use axum::{Json, extract::Path};
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/api/hello/{name}",
    params(("name" = String, Path, description = "Who to greet")),
    responses(
        (status = 200, description = "Greeting message")
    )
)]
pub async fn hello(Path(name): Path<String>) -> Json<Value> {
    Json(json!({ "message": format!("Bonjour {}!", name) }))
}
