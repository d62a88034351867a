use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

pub struct RootController;

impl RootController {
    pub async fn root() -> impl IntoResponse {
        "Welcome to the Song API!"
    }

    pub async fn health_check() -> impl IntoResponse {
        Json(json!({ "status": "ok" }))
    }
}
