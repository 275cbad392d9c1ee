//! Movie entity models and DTO.

use chrono::NaiveDate;
use cinelog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::director::Director;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director_id: DbId,
    pub plot_synopsis: String,
    pub release_date: NaiveDate,
}

/// Input DTO for creating a movie or fully replacing one on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieInput {
    pub title: String,
    pub director_id: DbId,
    pub plot_synopsis: String,
    pub release_date: NaiveDate,
}

/// Projection of a movie used on a director's detail page: the stored
/// fields needed for display, without the director reference.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub title: String,
    pub plot_synopsis: String,
    pub release_date: NaiveDate,
}

/// A movie with its director reference resolved to the full record.
#[derive(Debug, Clone, Serialize)]
pub struct MovieWithDirector {
    pub id: DbId,
    pub title: String,
    pub plot_synopsis: String,
    pub release_date: NaiveDate,
    pub director: Director,
}
