//! Repository for the `directors` table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::{Director, DirectorInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, family_name, date_of_birth, date_of_death";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(pool: &PgPool, input: &DirectorInput) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (first_name, family_name, date_of_birth, date_of_death)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.first_name)
            .bind(&input.family_name)
            .bind(input.date_of_birth)
            .bind(input.date_of_death)
            .fetch_one(pool)
            .await
    }

    /// Find a director by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors, ordered by first name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY first_name ASC");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Fully replace a director's fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &DirectorInput,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!(
            "UPDATE directors SET
                first_name = $2,
                family_name = $3,
                date_of_birth = $4,
                date_of_death = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.family_name)
            .bind(input.date_of_birth)
            .bind(input.date_of_death)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by ID. Returns `true` if a row was removed.
    ///
    /// Callers are responsible for the dependent-movie check first; this
    /// method removes the row unconditionally.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all directors.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM directors")
            .fetch_one(pool)
            .await
    }
}
