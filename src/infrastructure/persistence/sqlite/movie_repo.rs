//! SQLite Movie Repository
//!
//! 每部电影一行：`id` 为 `_id`，`document` 为其余字段组成的 JSON 对象

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

use super::{create_pool, fold_title, run_migrations, DatabaseConfig, DbPool};
use crate::application::ports::{
    DeleteResult, MovieRepositoryPort, RepositoryError, UpdateResult,
};
use crate::domain::movie::{
    Movie, MovieChanges, MovieId, NewMovie, Pagination, TitleFilter, TitleMatch,
};

/// SQLite Movie Repository
pub struct SqliteMovieRepository {
    pool: DbPool,
}

impl SqliteMovieRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 建立连接池并建表
    ///
    /// 连接字符串无效或数据库不可达时返回错误，调用方应在监听端口前等待其完成
    pub async fn initialize(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let pool = create_pool(config)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        run_migrations(&pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::new(pool))
    }
}

#[derive(FromRow)]
struct MovieRow {
    id: String,
    document: String,
}

impl TryFrom<MovieRow> for Movie {
    type Error = RepositoryError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let fields: Map<String, Value> = serde_json::from_str(&row.document)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Movie::from_parts(MovieId::from_uuid(id), fields))
    }
}

fn encode_document(fields: &Map<String, Value>) -> Result<String, RepositoryError> {
    serde_json::to_string(fields).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

/// SQLite 的 LIMIT/OFFSET 是 i64
fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl MovieRepositoryPort for SqliteMovieRepository {
    async fn add_new_movie(&self, movie: NewMovie) -> Result<Movie, RepositoryError> {
        let movie = movie.assign_id(MovieId::new());
        let document = encode_document(movie.fields())?;

        sqlx::query("INSERT INTO movies (id, document, title_folded) VALUES (?, ?, ?)")
            .bind(movie.id().to_string())
            .bind(document)
            .bind(fold_title(movie.title()))
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(movie)
    }

    async fn get_all_movies(
        &self,
        pagination: Pagination,
        title: Option<&TitleFilter>,
    ) -> Result<Vec<Movie>, RepositoryError> {
        let limit = to_sql_int(pagination.limit());
        let offset = to_sql_int(pagination.offset());

        let rows: Vec<MovieRow> = match title {
            None => {
                sqlx::query_as(
                    "SELECT id, document FROM movies ORDER BY id ASC LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            Some(filter) if filter.mode() == TitleMatch::Contains => {
                sqlx::query_as(
                    r#"
                    SELECT id, document FROM movies
                    WHERE instr(title_folded, ?) > 0
                    ORDER BY id ASC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(filter.needle().to_lowercase())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            Some(filter) => {
                sqlx::query_as(
                    r#"
                    SELECT id, document FROM movies
                    WHERE json_type(document, '$.title') = 'text'
                      AND json_extract(document, '$.title') = ?
                    ORDER BY id ASC
                    LIMIT ? OFFSET ?
                    "#,
                )
                .bind(filter.needle())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Movie::try_from).collect()
    }

    async fn get_movie_by_id(&self, id: MovieId) -> Result<Option<Movie>, RepositoryError> {
        let row: Option<MovieRow> =
            sqlx::query_as("SELECT id, document FROM movies WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Movie::try_from).transpose()
    }

    async fn update_movie_by_id(
        &self,
        changes: MovieChanges,
        id: MovieId,
    ) -> Result<UpdateResult, RepositoryError> {
        // 先取写锁：延迟事务在读后升级写锁时遇到并发写会直接返回 SQLITE_BUSY
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let row: Option<MovieRow> =
            sqlx::query_as("SELECT id, document FROM movies WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(UpdateResult {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let mut movie = Movie::try_from(row)?;
        let modified = movie.apply_changes(changes);

        if modified {
            sqlx::query("UPDATE movies SET document = ?, title_folded = ? WHERE id = ?")
                .bind(encode_document(movie.fields())?)
                .bind(fold_title(movie.title()))
                .bind(id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(UpdateResult {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_movie_by_id(&self, id: MovieId) -> Result<DeleteResult, RepositoryError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(DeleteResult {
            deleted_count: result.rows_affected(),
        })
    }
}
