//! Repository Ports - 出站端口
//!
//! 定义电影文档持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite 文档表）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::movie::{Movie, MovieChanges, MovieId, NewMovie, Pagination, TitleFilter};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 更新结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    /// 命中的文档数（0 或 1）
    pub matched_count: u64,
    /// 实际发生变化的文档数
    pub modified_count: u64,
}

/// 删除结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Movie Repository Port
///
/// 每个方法对应一次存储往返，不跨调用保持状态
#[async_trait]
pub trait MovieRepositoryPort: Send + Sync {
    /// 插入新文档，由存储层分配 `_id`
    async fn add_new_movie(&self, movie: NewMovie) -> Result<Movie, RepositoryError>;

    /// 分页查询，按 `_id` 升序
    async fn get_all_movies(
        &self,
        pagination: Pagination,
        title: Option<&TitleFilter>,
    ) -> Result<Vec<Movie>, RepositoryError>;

    /// 根据 `_id` 查找
    async fn get_movie_by_id(&self, id: MovieId) -> Result<Option<Movie>, RepositoryError>;

    /// 按 `$set` 语义更新
    async fn update_movie_by_id(
        &self,
        changes: MovieChanges,
        id: MovieId,
    ) -> Result<UpdateResult, RepositoryError>;

    /// 删除文档
    async fn delete_movie_by_id(&self, id: MovieId) -> Result<DeleteResult, RepositoryError>;
}
