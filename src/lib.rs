//! Reel - 电影文档 CRUD API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Movie Context: 无模式电影文档、分页、标题过滤
//!
//! 应用层 (application/):
//! - Ports: MovieRepositoryPort
//! - Commands: 新增 / 更新 / 删除
//! - Queries: 分页列表 / 单条查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Persistence: SQLite 文档表 (sqlx)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
