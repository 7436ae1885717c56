//! Movie Context - 电影限界上下文
//!
//! 职责:
//! - 无模式电影文档（`_id` + 客户端任意字段）
//! - 分页与标题过滤规则

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Movie, MovieChanges, NewMovie};
pub use errors::MovieError;
pub use value_objects::{MovieId, Pagination, TitleFilter, TitleMatch};
