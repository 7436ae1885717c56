//! HTTP Routes
//!
//! API Endpoints:
//! - /                 GET     存活检查
//! - /api/movies       POST    新增电影
//! - /api/movies       GET     分页列出（page、perPage 必填，title 可选）
//! - /api/movies/:id   GET     获取单部电影
//! - /api/movies/:id   PUT     更新电影
//! - /api/movies/:id   DELETE  删除电影

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::health))
        .nest("/api", api_routes())
        .fallback(handlers::route_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/movies", movie_routes())
}

/// Movie 路由
fn movie_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_movies).post(handlers::add_new_movie),
        )
        .route(
            "/:id",
            get(handlers::get_movie)
                .put(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
}
