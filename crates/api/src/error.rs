use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_core::validation::ValidationErrors;
use cinelog_db::models::movie::Movie;
use serde_json::json;

use crate::views::MovieView;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinelog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Rejected input; carries field-level messages and an echo of the
    /// submitted payload so a caller can re-display the form.
    #[error("Validation failed: {errors}")]
    Validation {
        errors: ValidationErrors,
        input: serde_json::Value,
    },

    /// A director delete was refused because movies still reference it.
    /// Carries the dependent movies so a caller can display them.
    #[error("Director {id} has {} dependent movies", .movies.len())]
    ReferentialConflict { id: DbId, movies: Vec<Movie> },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- Domain errors ---
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": format!("{entity} with id {id} not found"),
                    "code": "NOT_FOUND",
                }),
            ),

            // --- Store errors: propagated, never retried, never masked ---
            AppError::Database(err) => classify_sqlx_error(&err),

            // --- Validation with form re-display payload ---
            AppError::Validation { errors, input } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "errors": errors,
                    "input": input,
                }),
            ),

            // --- Delete-safety guard ---
            AppError::ReferentialConflict { id, movies } => {
                let views: Vec<MovieView> = movies.into_iter().map(Into::into).collect();
                (
                    StatusCode::CONFLICT,
                    json!({
                        "error": format!(
                            "Cannot delete director {id}: {} movies reference it",
                            views.len()
                        ),
                        "code": "REFERENTIAL_CONFLICT",
                        "movies": views,
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and JSON body.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, serde_json::Value) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            json!({ "error": "Resource not found", "code": "NOT_FOUND" }),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                }),
            )
        }
    }
}
