//! Movie Queries

use crate::domain::movie::MovieId;

/// 分页列出电影
///
/// `page` / `per_page` 保留查询字符串原文，由 handler 解析
#[derive(Debug, Clone)]
pub struct GetAllMovies {
    pub page: String,
    pub per_page: String,
    pub title: Option<String>,
}

/// 获取单部电影
#[derive(Debug, Clone)]
pub struct GetMovieById {
    pub movie_id: MovieId,
}
