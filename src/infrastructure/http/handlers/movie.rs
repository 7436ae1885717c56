//! Movie HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{
    AddNewMovie, DeleteMovieById, GetAllMovies, GetMovieById, UpdateMovieById,
};
use crate::domain::movie::{Movie, MovieId};
use crate::infrastructure::http::dto::{ListMoviesParams, MessageResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 空字符串与缺失同等对待
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_movie_id(path: Result<Path<String>, PathRejection>) -> Result<MovieId, ApiError> {
    let Path(raw) = path?;
    Ok(MovieId::parse(&raw)?)
}

/// 新增电影
///
/// 成功返回 201；插入失败同样被捕获并返回 404
pub async fn add_new_movie(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(document) = body?;

    let movie = state
        .add_new_movie_handler
        .handle(AddNewMovie { document })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "New movie with ID {} has been added",
            movie.id()
        ))),
    ))
}

/// 分页列出电影
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListMoviesParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(params) = params?;

    let (Some(page), Some(per_page)) = (non_empty(params.page), non_empty(params.per_page)) else {
        return Err(ApiError::BadRequest(
            "page or perPage cannot be empty!".to_string(),
        ));
    };

    let movies = state
        .get_all_movies_handler
        .handle(GetAllMovies {
            page,
            per_page,
            title: params.title,
        })
        .await?;

    Ok(Json(movies))
}

/// 获取电影详情
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Movie>, ApiError> {
    let movie_id = parse_movie_id(path)?;

    let movie = state
        .get_movie_handler
        .handle(GetMovieById { movie_id })
        .await?;

    Ok(Json(movie))
}

/// 更新电影（成功返回 201）
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let movie_id = parse_movie_id(path)?;
    let Json(changes) = body?;

    state
        .update_movie_handler
        .handle(UpdateMovieById { movie_id, changes })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Movie with ID {} has been updated",
            movie_id
        ))),
    ))
}

/// 删除电影
///
/// 成功时状态码为 204，但仍带 `{"message"}` 响应体
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let movie_id = parse_movie_id(path)?;

    let result = state
        .delete_movie_handler
        .handle(DeleteMovieById { movie_id })
        .await?;

    Ok((
        StatusCode::NO_CONTENT,
        Json(MessageResponse::new(format!(
            "Deleted {} movie",
            result.deleted_count
        ))),
    ))
}

/// 未匹配的路由
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
