//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use cinelog_core::director;
use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::director::DirectorInput;
use cinelog_db::repositories::DirectorRepo;

use crate::aggregate;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{DirectorDetailView, DirectorView, MovieView};

/// GET /api/v1/directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DirectorView>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/directors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DirectorInput>,
) -> AppResult<(StatusCode, Json<DirectorView>)> {
    let input = validate_input(input)?;
    let created = DirectorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/v1/directors/{id}
///
/// Concurrently fetches the director, their projected movies, and the
/// movie count; responds 404 if the director does not exist.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DirectorDetailView>> {
    let detail = aggregate::director_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// PUT /api/v1/directors/{id}
///
/// Full replace of all four stored fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DirectorInput>,
) -> AppResult<Json<DirectorView>> {
    let input = validate_input(input)?;
    let updated = DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/directors/{id}
///
/// Refused with 409 and the dependent list while any movie references
/// the director. The check-then-delete sequence is not transactional;
/// a concurrent movie insert between the two steps is an accepted race.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let (director, movies) = aggregate::director_deletion_precheck(&state.pool, id).await?;
    if !movies.is_empty() {
        return Err(AppError::ReferentialConflict {
            id: director.id,
            movies,
        });
    }

    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}

/// GET /api/v1/directors/{id}/movies
///
/// The full movie list referencing a director; 404 for an unknown id.
/// Doubles as the deletion-precheck view.
pub async fn list_movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<MovieView>>> {
    let (_director, movies) = aggregate::director_deletion_precheck(&state.pool, id).await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

/// Trim name fields and apply the director validation rules, echoing the
/// submitted payload back on failure.
fn validate_input(input: DirectorInput) -> Result<DirectorInput, AppError> {
    let input = DirectorInput {
        first_name: input.first_name.trim().to_string(),
        family_name: input.family_name.trim().to_string(),
        date_of_birth: input.date_of_birth,
        date_of_death: input.date_of_death,
    };

    let today = Utc::now().date_naive();
    if let Err(errors) = director::validate(
        &input.first_name,
        &input.family_name,
        input.date_of_birth,
        input.date_of_death,
        today,
    ) {
        return Err(AppError::Validation {
            errors,
            input: serde_json::to_value(&input).unwrap_or_default(),
        });
    }

    Ok(input)
}
