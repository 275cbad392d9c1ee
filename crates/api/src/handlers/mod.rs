pub mod catalog;
pub mod director;
pub mod movie;
