//! Movie Commands

use serde_json::Value;

use crate::domain::movie::MovieId;

/// 新增电影命令（请求体原样传入）
#[derive(Debug, Clone)]
pub struct AddNewMovie {
    pub document: Value,
}

/// 更新电影命令
#[derive(Debug, Clone)]
pub struct UpdateMovieById {
    pub movie_id: MovieId,
    pub changes: Value,
}

/// 删除电影命令
#[derive(Debug, Clone)]
pub struct DeleteMovieById {
    pub movie_id: MovieId,
}
