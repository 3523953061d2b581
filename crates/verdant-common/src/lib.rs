//! Verdant Common Library
//!
//! Shared error handling and logging setup for the Verdant workspace.
//!
//! # Overview
//!
//! - **Error Handling**: the [`VerdantError`] type and `Result` alias used
//!   for cross-crate plumbing outside the HTTP layer
//! - **Logging**: tracing subscriber configuration and initialization,
//!   driven by environment variables
//!
//! # Example
//!
//! ```no_run
//! use verdant_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{Result, VerdantError};
