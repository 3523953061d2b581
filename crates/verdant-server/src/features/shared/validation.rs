//! Explicit request validation
//!
//! Commands validate their payloads here before anything reaches the store,
//! so schema rules (required fields, minimum lengths) are visible in code
//! rather than implied by the storage engine.

use thiserror::Error;

/// Constraint violations found while validating a request payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", join_required(.0))]
    MissingFields(Vec<&'static str>),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("At least one field must be provided for update")]
    EmptyUpdate,
}

/// True when a required string field is absent or whitespace-only
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// Check a minimum-length constraint on a present field
pub fn check_min_length(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    // Character count, not byte length, so multibyte text is measured fairly
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

fn join_required(fields: &[&'static str]) -> String {
    match fields {
        [] => "required fields are missing".to_string(),
        [only] => format!("{} is required", only),
        [init @ .., last] => format!("{} and {} are required", init.join(", "), last),
    }
}
