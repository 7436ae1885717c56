//! Movie Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MovieRepositoryPort;
use crate::application::queries::{GetAllMovies, GetMovieById};
use crate::domain::movie::{Movie, Pagination, TitleFilter, TitleMatch};

/// GetAllMovies Handler
pub struct GetAllMoviesHandler {
    movie_repo: Arc<dyn MovieRepositoryPort>,
    title_match: TitleMatch,
}

impl GetAllMoviesHandler {
    pub fn new(movie_repo: Arc<dyn MovieRepositoryPort>, title_match: TitleMatch) -> Self {
        Self {
            movie_repo,
            title_match,
        }
    }

    pub async fn handle(&self, query: GetAllMovies) -> Result<Vec<Movie>, ApplicationError> {
        let pagination = Pagination::parse(&query.page, &query.per_page)?;
        let title = query
            .title
            .and_then(|t| TitleFilter::new(t, self.title_match));

        let movies = self
            .movie_repo
            .get_all_movies(pagination, title.as_ref())
            .await?;

        tracing::debug!(
            page = pagination.page(),
            per_page = pagination.per_page(),
            title = title.as_ref().map(TitleFilter::needle),
            count = movies.len(),
            "Movies listed"
        );

        Ok(movies)
    }
}

/// GetMovieById Handler
pub struct GetMovieByIdHandler {
    movie_repo: Arc<dyn MovieRepositoryPort>,
}

impl GetMovieByIdHandler {
    pub fn new(movie_repo: Arc<dyn MovieRepositoryPort>) -> Self {
        Self { movie_repo }
    }

    pub async fn handle(&self, query: GetMovieById) -> Result<Movie, ApplicationError> {
        self.movie_repo
            .get_movie_by_id(query.movie_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Movie", query.movie_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::movie::{MovieId, NewMovie};
    use crate::infrastructure::persistence::sqlite::{DatabaseConfig, SqliteMovieRepository};

    async fn seeded_repo(titles: &[&str]) -> Arc<dyn MovieRepositoryPort> {
        let repo = SqliteMovieRepository::initialize(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        for title in titles {
            let movie = NewMovie::from_value(json!({ "title": title })).unwrap();
            repo.add_new_movie(movie).await.unwrap();
        }
        Arc::new(repo)
    }

    fn list(page: &str, per_page: &str, title: Option<&str>) -> GetAllMovies {
        GetAllMovies {
            page: page.to_string(),
            per_page: per_page.to_string(),
            title: title.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_get_all_movies_pages() {
        let repo = seeded_repo(&["A", "B", "C", "D", "E"]).await;
        let handler = GetAllMoviesHandler::new(repo, TitleMatch::Contains);

        let first = handler.handle(list("1", "2", None)).await.unwrap();
        let titles: Vec<_> = first.iter().filter_map(Movie::title).collect();
        assert_eq!(titles, vec!["A", "B"]);

        let last = handler.handle(list("3", "2", None)).await.unwrap();
        let titles: Vec<_> = last.iter().filter_map(Movie::title).collect();
        assert_eq!(titles, vec!["E"]);

        let beyond = handler.handle(list("4", "2", None)).await.unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_movies_invalid_pagination() {
        let handler = GetAllMoviesHandler::new(seeded_repo(&[]).await, TitleMatch::Contains);

        let result = handler.handle(list("zero", "2", None)).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));

        let result = handler.handle(list("1", "0", None)).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_get_all_movies_title_filter_modes() {
        let titles = ["The Matrix", "The Matrix Reloaded", "Heat"];

        let contains =
            GetAllMoviesHandler::new(seeded_repo(&titles).await, TitleMatch::Contains);
        let found = contains.handle(list("1", "10", Some("matrix"))).await.unwrap();
        assert_eq!(found.len(), 2);

        let exact = GetAllMoviesHandler::new(seeded_repo(&titles).await, TitleMatch::Exact);
        let found = exact
            .handle(list("1", "10", Some("The Matrix")))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        // 空标题等同于不过滤
        let found = exact.handle(list("1", "10", Some(""))).await.unwrap();
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn test_get_movie_by_id_not_found() {
        let handler = GetMovieByIdHandler::new(seeded_repo(&[]).await);

        let result = handler
            .handle(GetMovieById {
                movie_id: MovieId::new(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
