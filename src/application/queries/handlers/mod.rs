//! Query Handlers 实现

mod movie_handlers;

pub use movie_handlers::*;
