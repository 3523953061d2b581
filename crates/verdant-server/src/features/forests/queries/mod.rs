pub mod get;
pub mod list;

pub use get::{ContinentRef, ForestView};
pub use list::{ListForestsQuery, ListForestsResponse};
