//! Cinelog API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! aggregation, view models) so integration tests and the binary
//! entrypoint can both access them.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
