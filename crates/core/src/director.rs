//! Director derived fields and input validation.
//!
//! The original data model exposed these as computed properties on the
//! stored record; here they are free functions over the stored fields so
//! derivation stays decoupled from persistence.

use chrono::{Datelike, NaiveDate, Utc};

use crate::validation::ValidationErrors;

/// Maximum length for either name component.
pub const MAX_NAME_LEN: usize = 100;

/// "first_name family_name" with a single separating space.
///
/// No case or whitespace normalization; callers pass already-trimmed
/// values.
pub fn full_name(first: &str, family: &str) -> String {
    format!("{first} {family}")
}

/// Format a lifespan as `"<birth> - <death>"`.
///
/// Each side is rendered as an ordinal date ("13th August 1899") when
/// present and left empty when absent; the `" - "` separator is always
/// emitted, so a living person reads `"30th July 1970 - "` and a director
/// with no recorded dates reads `" - "`.
pub fn lifespan(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> String {
    let mut out = String::new();
    if let Some(b) = birth {
        out.push_str(&ordinal_date(b));
    }
    out.push_str(" - ");
    if let Some(d) = death {
        out.push_str(&ordinal_date(d));
    }
    out
}

/// Completed whole years from `birth` to `reference`.
pub fn age_at(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// A director's age in completed years.
///
/// `None` without a birth date. With a death date the result is fixed;
/// otherwise it is measured against today's date.
pub fn age(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> Option<i32> {
    let birth = birth?;
    let reference = death.unwrap_or_else(|| Utc::now().date_naive());
    Some(age_at(birth, reference))
}

/// `YYYY-MM-DD` string for prefilling a date input, `None` when the date
/// is absent (the caller decides how to render an empty field).
pub fn date_for_form(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Validate director input fields, collecting one error per failing field.
///
/// `today` is passed in so the future-birth check stays deterministic.
/// Names are expected pre-trimmed. The date invariant: a death date
/// requires a birth date and must not precede it (equal is allowed).
pub fn validate(
    first_name: &str,
    family_name: &str,
    date_of_birth: Option<NaiveDate>,
    date_of_death: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if first_name.is_empty() {
        errors.push("first_name", "First name is required");
    } else if first_name.len() > MAX_NAME_LEN {
        errors.push(
            "first_name",
            format!("First name must be at most {MAX_NAME_LEN} characters"),
        );
    }

    if family_name.is_empty() {
        errors.push("family_name", "Family name is required");
    } else if family_name.len() > MAX_NAME_LEN {
        errors.push(
            "family_name",
            format!("Family name must be at most {MAX_NAME_LEN} characters"),
        );
    }

    if let Some(birth) = date_of_birth {
        if birth > today {
            errors.push("date_of_birth", "Date of birth can't be in the future");
        }
    }

    if let Some(death) = date_of_death {
        match date_of_birth {
            None => {
                errors.push(
                    "date_of_death",
                    "Date of death must be later than date of birth",
                );
            }
            Some(birth) if death < birth => {
                errors.push(
                    "date_of_death",
                    "Date of death must be later than date of birth",
                );
            }
            Some(_) => {}
        }
    }

    errors.into_result()
}

fn ordinal_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{day}{} {}", ordinal_suffix(day), date.format("%B %Y"))
}

/// English ordinal suffix for a day of month (1st, 2nd, 3rd, 4th, 11th..).
fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
