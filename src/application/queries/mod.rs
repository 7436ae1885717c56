//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：分页列表与单条查询

mod movie_queries;

pub mod handlers;

pub use movie_queries::*;
