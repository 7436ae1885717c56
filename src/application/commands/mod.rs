//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：新增、更新、删除电影文档

mod movie_commands;

pub mod handlers;

pub use movie_commands::*;
