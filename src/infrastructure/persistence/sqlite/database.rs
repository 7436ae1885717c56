//! SQLite Database - 数据库连接和建表

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 连接字符串，例如 `sqlite:data/movies.db?mode=rwc`
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
        }
    }

    /// 内存数据库只能有一个连接，否则每个连接各自一份数据
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // 启用 WAL 模式，允许并发读写
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    // 设置 busy_timeout=5000ms，遇到锁时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA synchronous=NORMAL")
        .execute(&pool)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 标题的小写形式，用于不区分大小写的子串查询
///
/// SQLite 的 lower() 只处理 ASCII，因此在 Rust 侧折叠；非字符串标题为 None
pub fn fold_title(title: Option<&str>) -> Option<String> {
    title.map(str::to_lowercase)
}

/// 创建 movies 文档表
///
/// `document` 保存不含 `_id` 的 JSON 对象，`_id` 单独作为主键列；
/// `title_folded` 是字符串标题的小写副本
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id TEXT PRIMARY KEY,
            document TEXT NOT NULL CHECK (json_valid(document)),
            title_folded TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    add_title_folded_column(pool).await?;

    // 标题精确匹配走表达式索引
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_movies_title
        ON movies(json_extract(document, '$.title'))
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 旧表没有 `title_folded` 列时补列并回填
async fn add_title_folded_column(pool: &DbPool) -> Result<(), sqlx::Error> {
    let (exists,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM pragma_table_info('movies') WHERE name = 'title_folded'",
    )
    .fetch_one(pool)
    .await?;
    if exists > 0 {
        return Ok(());
    }

    sqlx::query("ALTER TABLE movies ADD COLUMN title_folded TEXT")
        .execute(pool)
        .await?;

    let titles: Vec<(String, String)> = sqlx::query_as(
        r#"
        SELECT id, json_extract(document, '$.title') FROM movies
        WHERE json_type(document, '$.title') = 'text'
        "#,
    )
    .fetch_all(pool)
    .await?;

    let backfilled = titles.len();
    for (id, title) in titles {
        sqlx::query("UPDATE movies SET title_folded = ? WHERE id = ?")
            .bind(fold_title(Some(&title)))
            .bind(id)
            .execute(pool)
            .await?;
    }

    tracing::info!(backfilled, "Added title_folded column to movies");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // 重复执行不报错
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_file_db() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.db");
        let config = DatabaseConfig::new(format!("sqlite:{}?mode=rwc", path.display()), 2);

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_migration_backfills_title_folded() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        sqlx::query("CREATE TABLE movies (id TEXT PRIMARY KEY, document TEXT NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO movies (id, document) VALUES ('a', ?), ('b', ?)")
            .bind(r#"{"title":"ÉTÉ Meurtrier"}"#)
            .bind(r#"{"title":1999}"#)
            .execute(&pool)
            .await
            .unwrap();

        run_migrations(&pool).await.unwrap();

        let rows: Vec<(String, Option<String>)> =
            sqlx::query_as("SELECT id, title_folded FROM movies ORDER BY id")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert_eq!(
            rows,
            vec![
                ("a".to_string(), Some("été meurtrier".to_string())),
                ("b".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_fold_title_handles_unicode() {
        assert_eq!(fold_title(Some("ÉTÉ")), Some("été".to_string()));
        assert_eq!(fold_title(Some("Straße")), Some("straße".to_string()));
        assert_eq!(fold_title(None), None);
    }

    #[tokio::test]
    async fn test_invalid_connection_string_fails() {
        let config = DatabaseConfig::new("sqlite:/nonexistent/reel/movies.db?mode=rw", 1);
        assert!(create_pool(&config).await.is_err());
    }
}
