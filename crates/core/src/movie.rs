//! Movie derived fields and input validation.

use chrono::{Datelike, NaiveDate};

use crate::validation::ValidationErrors;

/// "D Month YYYY" without an ordinal suffix, e.g. "5 March 1999".
pub fn release_date_formatted(date: NaiveDate) -> String {
    format!("{} {}", date.day(), date.format("%B %Y"))
}

/// Four-digit release year as a string.
pub fn release_year(date: NaiveDate) -> String {
    date.format("%Y").to_string()
}

/// `YYYY-MM-DD` string for prefilling the release-date input.
pub fn release_date_for_form(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Validate movie text fields, collecting one error per failing field.
///
/// The release date and director reference are structurally required by
/// the input type; the director's existence is checked by the handler
/// against the store and reported under the `director_id` field.
pub fn validate(title: &str, plot_synopsis: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if title.is_empty() {
        errors.push("title", "Movie name is required");
    }
    if plot_synopsis.is_empty() {
        errors.push("plot_synopsis", "Plot is required");
    }

    errors.into_result()
}
