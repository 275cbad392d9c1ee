//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::movie;
use cinelog_core::types::DbId;
use cinelog_core::validation::ValidationErrors;
use cinelog_db::models::movie::MovieInput;
use cinelog_db::repositories::{DirectorRepo, MovieRepo};
use cinelog_db::DbPool;

use crate::aggregate;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{MovieDetailView, MovieView};

/// GET /api/v1/movies
///
/// All movies with their director references resolved, by title.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieDetailView>>> {
    let movies = MovieRepo::list_with_directors(&state.pool).await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/movies
///
/// Titles are unique by convention, enforced here with a pre-check: when
/// a movie with the exact same title already exists, the request
/// resolves to that movie (200) instead of creating a duplicate (201).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MovieInput>,
) -> AppResult<(StatusCode, Json<MovieView>)> {
    let input = validate_input(&state.pool, input).await?;

    if let Some(existing) = MovieRepo::find_by_title(&state.pool, &input.title).await? {
        return Ok((StatusCode::OK, Json(existing.into())));
    }

    let created = MovieRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieDetailView>> {
    let detail = aggregate::movie_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// PUT /api/v1/movies/{id}
///
/// Full replace of all stored fields. Unlike create there is no
/// duplicate-title pre-check; updates keep whatever title is submitted.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MovieInput>,
) -> AppResult<Json<MovieView>> {
    let input = validate_input(&state.pool, input).await?;
    let updated = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
    }
}

/// Trim text fields, apply the movie validation rules, and verify the
/// referenced director exists, echoing the payload back on failure.
async fn validate_input(pool: &DbPool, input: MovieInput) -> Result<MovieInput, AppError> {
    let input = MovieInput {
        title: input.title.trim().to_string(),
        director_id: input.director_id,
        plot_synopsis: input.plot_synopsis.trim().to_string(),
        release_date: input.release_date,
    };

    let mut errors = match movie::validate(&input.title, &input.plot_synopsis) {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    if DirectorRepo::find_by_id(pool, input.director_id)
        .await?
        .is_none()
    {
        errors.push("director_id", "Director does not exist");
    }

    if let Err(errors) = errors.into_result() {
        return Err(AppError::Validation {
            errors,
            input: serde_json::to_value(&input).unwrap_or_default(),
        });
    }

    Ok(input)
}
