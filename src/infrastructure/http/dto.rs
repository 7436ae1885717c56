//! Data Transfer Objects

use serde::{Deserialize, Serialize};

/// 统一消息响应 `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `GET /api/movies` 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListMoviesParams {
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
    pub title: Option<String>,
}
