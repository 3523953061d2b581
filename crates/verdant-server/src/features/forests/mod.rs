pub mod commands;
pub mod queries;
pub mod routes;


pub use commands::{CreateForestCommand, UpdateForestCommand};
pub use routes::routes;

/// Minimum accepted length for a forest description
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
