pub mod commands;
pub mod queries;
pub mod routes;

#[cfg(test)]
mod routes_test;

pub use commands::{CreateContinentCommand, UpdateContinentCommand};
pub use routes::routes;
