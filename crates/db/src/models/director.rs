//! Director entity model and DTO.

use chrono::NaiveDate;
use cinelog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A director row from the `directors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Input DTO for creating a director or fully replacing one on update.
///
/// Updates are full replaces of all four fields, so create and update
/// share the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorInput {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}
