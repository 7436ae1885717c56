//! Movie Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie ID cannot be empty")]
    EmptyId,

    #[error("Invalid movie ID: {0}")]
    InvalidId(String),

    #[error("page and perPage query parameters must be valid numbers")]
    InvalidPagination,

    #[error("Movie document must be a JSON object")]
    NotAnObject,
}
