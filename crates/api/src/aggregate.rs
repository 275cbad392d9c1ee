//! Concurrent fan-out queries that assemble detail views.
//!
//! Independent sub-fetches for one request run under `tokio::try_join!`
//! and are only combined after all have settled. An infrastructure error
//! from any branch fails the whole operation; a missing primary record
//! turns into `NotFound` after the join, so no partial result is ever
//! reported.

use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::director::Director;
use cinelog_db::models::movie::Movie;
use cinelog_db::repositories::{DirectorRepo, MovieRepo};
use cinelog_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::views::{CatalogSummary, DirectorDetailView, MovieDetailView};

/// Assemble a director's detail page: the director record, their movies
/// projected to display fields, and the movie count.
pub async fn director_detail(pool: &DbPool, id: DbId) -> AppResult<DirectorDetailView> {
    let (director, movies, movie_count) = tokio::try_join!(
        DirectorRepo::find_by_id(pool, id),
        MovieRepo::list_by_director(pool, id),
        MovieRepo::count_by_director(pool, id),
    )?;

    let director = director.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Director",
        id,
    }))?;

    Ok(DirectorDetailView {
        director: director.into(),
        movies: movies.into_iter().map(Into::into).collect(),
        movie_count,
    })
}

/// Fetch a director together with every movie referencing it.
///
/// This backs the delete-safety guard: a non-empty movie list means the
/// director cannot be removed. The check is not atomic against a movie
/// being inserted between check and delete; that race is accepted and
/// documented rather than papered over with a transaction.
pub async fn director_deletion_precheck(
    pool: &DbPool,
    id: DbId,
) -> AppResult<(Director, Vec<Movie>)> {
    let (director, movies) = tokio::try_join!(
        DirectorRepo::find_by_id(pool, id),
        MovieRepo::find_by_director(pool, id),
    )?;

    let director = director.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Director",
        id,
    }))?;

    Ok((director, movies))
}

/// Fetch a movie with its director reference resolved.
pub async fn movie_detail(pool: &DbPool, id: DbId) -> AppResult<MovieDetailView> {
    let movie = MovieRepo::find_by_id_with_director(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(movie.into())
}

/// Count movies and directors for the catalog home page.
pub async fn catalog_summary(pool: &DbPool) -> AppResult<CatalogSummary> {
    let (movie_count, director_count) =
        tokio::try_join!(MovieRepo::count(pool), DirectorRepo::count(pool))?;
    Ok(CatalogSummary {
        movie_count,
        director_count,
    })
}
