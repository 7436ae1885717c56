//! Application State
//!
//! 持有注入的 Repository 以及所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddNewMovieHandler, DeleteMovieByIdHandler, UpdateMovieByIdHandler,
    // Query handlers
    GetAllMoviesHandler, GetMovieByIdHandler,
    // Ports
    MovieRepositoryPort,
};
use crate::domain::movie::TitleMatch;

/// 应用状态
///
/// 数据库客户端在 main 中创建后注入，不使用全局单例
pub struct AppState {
    // ========== Command Handlers ==========
    pub add_new_movie_handler: AddNewMovieHandler,
    pub update_movie_handler: UpdateMovieByIdHandler,
    pub delete_movie_handler: DeleteMovieByIdHandler,

    // ========== Query Handlers ==========
    pub get_all_movies_handler: GetAllMoviesHandler,
    pub get_movie_handler: GetMovieByIdHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(movie_repo: Arc<dyn MovieRepositoryPort>, title_match: TitleMatch) -> Self {
        Self {
            add_new_movie_handler: AddNewMovieHandler::new(movie_repo.clone()),
            update_movie_handler: UpdateMovieByIdHandler::new(movie_repo.clone()),
            delete_movie_handler: DeleteMovieByIdHandler::new(movie_repo.clone()),

            get_all_movies_handler: GetAllMoviesHandler::new(movie_repo.clone(), title_match),
            get_movie_handler: GetMovieByIdHandler::new(movie_repo),
        }
    }
}
