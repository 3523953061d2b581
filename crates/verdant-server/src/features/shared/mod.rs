//! Utilities shared across feature modules

pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{check_min_length, is_blank, ValidationError};
