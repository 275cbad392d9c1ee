//! Repository for the `movies` table.

use cinelog_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::director::Director;
use crate::models::movie::{Movie, MovieInput, MovieSummary, MovieWithDirector};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director_id, plot_synopsis, release_date";

/// Joined column list for queries that resolve the director reference.
/// Director columns are aliased with a `d_` prefix to avoid collisions.
const JOINED_COLUMNS: &str = "m.id, m.title, m.director_id, m.plot_synopsis, m.release_date, \
     d.first_name AS d_first_name, d.family_name AS d_family_name, \
     d.date_of_birth AS d_date_of_birth, d.date_of_death AS d_date_of_death";

/// Provides CRUD operations for movies, including director-resolving
/// (populate) queries and the reverse-filter lookups used by the
/// director deletion guard.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &MovieInput) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, director_id, plot_synopsis, release_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.director_id)
            .bind(&input.plot_synopsis)
            .bind(input.release_date)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by exact title. Used by the create handler's
    /// duplicate-title pre-check; title uniqueness is a convention, not a
    /// database constraint.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE title = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by ID with its director reference resolved.
    pub async fn find_by_id_with_director(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithDirector>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM movies m
             JOIN directors d ON d.id = m.director_id
             WHERE m.id = $1"
        );
        sqlx::query(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(movie_with_director_from_row)
            .transpose()
    }

    /// List all movies with directors resolved, ordered by title ascending.
    pub async fn list_with_directors(pool: &PgPool) -> Result<Vec<MovieWithDirector>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM movies m
             JOIN directors d ON d.id = m.director_id
             ORDER BY m.title ASC"
        );
        sqlx::query(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(movie_with_director_from_row)
            .collect()
    }

    /// List a director's movies projected to the display fields, ordered
    /// by release date ascending.
    pub async fn list_by_director(
        pool: &PgPool,
        director_id: DbId,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        sqlx::query_as::<_, MovieSummary>(
            "SELECT id, title, plot_synopsis, release_date FROM movies
             WHERE director_id = $1
             ORDER BY release_date ASC",
        )
        .bind(director_id)
        .fetch_all(pool)
        .await
    }

    /// List the full movie rows referencing a director, ordered by title
    /// ascending. Used by the deletion guard, which reports the dependent
    /// movies back to the caller.
    pub async fn find_by_director(
        pool: &PgPool,
        director_id: DbId,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM movies WHERE director_id = $1 ORDER BY title ASC");
        sqlx::query_as::<_, Movie>(&query)
            .bind(director_id)
            .fetch_all(pool)
            .await
    }

    /// Count the movies referencing a director.
    pub async fn count_by_director(pool: &PgPool, director_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE director_id = $1")
            .bind(director_id)
            .fetch_one(pool)
            .await
    }

    /// Fully replace a movie's fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MovieInput,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                director_id = $3,
                plot_synopsis = $4,
                release_date = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.director_id)
            .bind(&input.plot_synopsis)
            .bind(input.release_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }
}

fn movie_with_director_from_row(row: PgRow) -> Result<MovieWithDirector, sqlx::Error> {
    Ok(MovieWithDirector {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        plot_synopsis: row.try_get("plot_synopsis")?,
        release_date: row.try_get("release_date")?,
        director: Director {
            id: row.try_get("director_id")?,
            first_name: row.try_get("d_first_name")?,
            family_name: row.try_get("d_family_name")?,
            date_of_birth: row.try_get("d_date_of_birth")?,
            date_of_death: row.try_get("d_date_of_death")?,
        },
    })
}
