//! Persistence Layer - 数据持久化
//!
//! 电影文档存储在 SQLite 中（JSON 文本列）

pub mod sqlite;

pub use self::sqlite::SqliteMovieRepository;
