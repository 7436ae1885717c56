//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Movie Context: 电影文档管理

pub mod movie;
