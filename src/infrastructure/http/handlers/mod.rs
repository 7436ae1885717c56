//! HTTP Handlers

mod health;
mod movie;

pub use health::*;
pub use movie::*;
