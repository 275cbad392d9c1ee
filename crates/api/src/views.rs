//! JSON view models: stored fields plus derived display fields.
//!
//! The API never formats HTML; it hands these plain structures to
//! whatever renders them. Derived values come from the pure calculators
//! in `cinelog_core` and are computed at read time, never persisted.

use chrono::NaiveDate;
use serde::Serialize;
use cinelog_core::types::DbId;
use cinelog_core::{director, movie};
use cinelog_db::models::director::Director;
use cinelog_db::models::movie::{Movie, MovieSummary, MovieWithDirector};

/// A director with derived display fields.
///
/// The `*_for_form` strings are `None` when the date is absent so an
/// edit form can decide how to render an empty input.
#[derive(Debug, Clone, Serialize)]
pub struct DirectorView {
    pub id: DbId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub full_name: String,
    pub lifespan: String,
    pub age: Option<i32>,
    pub date_of_birth_for_form: Option<String>,
    pub date_of_death_for_form: Option<String>,
}

impl From<Director> for DirectorView {
    fn from(d: Director) -> Self {
        Self {
            full_name: director::full_name(&d.first_name, &d.family_name),
            lifespan: director::lifespan(d.date_of_birth, d.date_of_death),
            age: director::age(d.date_of_birth, d.date_of_death),
            date_of_birth_for_form: director::date_for_form(d.date_of_birth),
            date_of_death_for_form: director::date_for_form(d.date_of_death),
            id: d.id,
            first_name: d.first_name,
            family_name: d.family_name,
            date_of_birth: d.date_of_birth,
            date_of_death: d.date_of_death,
        }
    }
}

/// A movie with derived display fields, director left as a reference.
#[derive(Debug, Clone, Serialize)]
pub struct MovieView {
    pub id: DbId,
    pub title: String,
    pub director_id: DbId,
    pub plot_synopsis: String,
    pub release_date: NaiveDate,
    pub release_date_formatted: String,
    pub release_year: String,
    pub release_date_for_form: String,
}

impl From<Movie> for MovieView {
    fn from(m: Movie) -> Self {
        Self {
            release_date_formatted: movie::release_date_formatted(m.release_date),
            release_year: movie::release_year(m.release_date),
            release_date_for_form: movie::release_date_for_form(m.release_date),
            id: m.id,
            title: m.title,
            director_id: m.director_id,
            plot_synopsis: m.plot_synopsis,
            release_date: m.release_date,
        }
    }
}

/// Projected movie entry on a director's detail page.
#[derive(Debug, Clone, Serialize)]
pub struct MovieSummaryView {
    pub id: DbId,
    pub title: String,
    pub plot_synopsis: String,
    pub release_date: NaiveDate,
    pub release_date_formatted: String,
    pub release_year: String,
}

impl From<MovieSummary> for MovieSummaryView {
    fn from(m: MovieSummary) -> Self {
        Self {
            release_date_formatted: movie::release_date_formatted(m.release_date),
            release_year: movie::release_year(m.release_date),
            id: m.id,
            title: m.title,
            plot_synopsis: m.plot_synopsis,
            release_date: m.release_date,
        }
    }
}

/// A movie with its director reference resolved to a full view.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetailView {
    pub id: DbId,
    pub title: String,
    pub plot_synopsis: String,
    pub release_date: NaiveDate,
    pub release_date_formatted: String,
    pub release_year: String,
    pub release_date_for_form: String,
    pub director: DirectorView,
}

impl From<MovieWithDirector> for MovieDetailView {
    fn from(m: MovieWithDirector) -> Self {
        Self {
            release_date_formatted: movie::release_date_formatted(m.release_date),
            release_year: movie::release_year(m.release_date),
            release_date_for_form: movie::release_date_for_form(m.release_date),
            id: m.id,
            title: m.title,
            plot_synopsis: m.plot_synopsis,
            release_date: m.release_date,
            director: m.director.into(),
        }
    }
}

/// Director detail page data: the director, their movies (projected),
/// and the movie count, assembled by the aggregation layer.
#[derive(Debug, Clone, Serialize)]
pub struct DirectorDetailView {
    pub director: DirectorView,
    pub movies: Vec<MovieSummaryView>,
    pub movie_count: i64,
}

/// Catalog home page counts.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub movie_count: i64,
    pub director_count: i64,
}
