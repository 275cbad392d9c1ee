//! Pure domain logic for the cinelog film catalog.
//!
//! Everything in this crate is deterministic and free of I/O: shared ID and
//! date types, the not-found error, field-level validation, and the
//! derived-field calculators (full name, lifespan, age, formatted release
//! dates). Persistence and HTTP live in `cinelog-db` and `cinelog-api`.

pub mod director;
pub mod error;
pub mod movie;
pub mod types;
pub mod validation;
