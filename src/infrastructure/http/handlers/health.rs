//! Liveness Handler

use axum::Json;

use crate::infrastructure::http::dto::MessageResponse;

/// `GET /` - 存活检查
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("API Listening"))
}
