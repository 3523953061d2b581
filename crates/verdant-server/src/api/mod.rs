//! HTTP response and error translation types

pub mod response;

pub use response::{ApiError, ApiResult, ErrorResponse};
