//! SQLite Persistence - SQLite 文档存储实现

mod database;
mod movie_repo;

pub use database::*;
pub use movie_repo::*;
