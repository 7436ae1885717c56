//! Movie Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddNewMovie, DeleteMovieById, UpdateMovieById};
use crate::application::error::ApplicationError;
use crate::application::ports::{DeleteResult, MovieRepositoryPort, UpdateResult};
use crate::domain::movie::{Movie, MovieChanges, NewMovie};

// ============================================================================
// AddNewMovie
// ============================================================================

/// AddNewMovie Handler
pub struct AddNewMovieHandler {
    movie_repo: Arc<dyn MovieRepositoryPort>,
}

impl AddNewMovieHandler {
    pub fn new(movie_repo: Arc<dyn MovieRepositoryPort>) -> Self {
        Self { movie_repo }
    }

    pub async fn handle(&self, command: AddNewMovie) -> Result<Movie, ApplicationError> {
        let new_movie = NewMovie::from_value(command.document)?;
        let movie = self.movie_repo.add_new_movie(new_movie).await?;

        tracing::info!(
            movie_id = %movie.id(),
            title = movie.title().unwrap_or_default(),
            "Movie created"
        );

        Ok(movie)
    }
}

// ============================================================================
// UpdateMovieById
// ============================================================================

/// UpdateMovieById Handler
pub struct UpdateMovieByIdHandler {
    movie_repo: Arc<dyn MovieRepositoryPort>,
}

impl UpdateMovieByIdHandler {
    pub fn new(movie_repo: Arc<dyn MovieRepositoryPort>) -> Self {
        Self { movie_repo }
    }

    /// 目标不存在时返回 NotFound
    pub async fn handle(&self, command: UpdateMovieById) -> Result<UpdateResult, ApplicationError> {
        let movie_id = command.movie_id;
        let changes = MovieChanges::from_value(command.changes)?;
        let field_count = changes.len();

        let result = self
            .movie_repo
            .update_movie_by_id(changes, movie_id)
            .await?;

        if result.matched_count == 0 {
            return Err(ApplicationError::not_found("Movie", movie_id));
        }

        tracing::info!(
            movie_id = %movie_id,
            fields = field_count,
            modified = result.modified_count,
            "Movie updated"
        );

        Ok(result)
    }
}

// ============================================================================
// DeleteMovieById
// ============================================================================

/// DeleteMovieById Handler
pub struct DeleteMovieByIdHandler {
    movie_repo: Arc<dyn MovieRepositoryPort>,
}

impl DeleteMovieByIdHandler {
    pub fn new(movie_repo: Arc<dyn MovieRepositoryPort>) -> Self {
        Self { movie_repo }
    }

    /// 没有删除任何文档时返回 NotFound
    pub async fn handle(&self, command: DeleteMovieById) -> Result<DeleteResult, ApplicationError> {
        let movie_id = command.movie_id;
        let result = self.movie_repo.delete_movie_by_id(movie_id).await?;

        if result.deleted_count == 0 {
            return Err(ApplicationError::not_found("Movie", movie_id));
        }

        tracing::info!(movie_id = %movie_id, "Movie deleted");

        Ok(result)
    }
}
