//! Verdant Server Library
//!
//! HTTP server for a catalog of forests and the continents they grow on.
//!
//! # Overview
//!
//! The Verdant server exposes a small REST API over two resources:
//!
//! - **Continents**: `{id, name, keywords}` records with unique names
//! - **Forests**: `{_id, name, location, type, description, timestamp,
//!   continent}` records with unique names and an optional, relaxed link to a
//!   continent
//!
//! # Architecture
//!
//! Each resource lives in a feature module split into **commands** (writes)
//! and **queries** (reads), one file per operation. Handlers validate their
//! payload, call the storage adapter, and let a single translator map typed
//! outcomes to HTTP statuses:
//!
//! - validation failure and an id-less collection delete answer 400
//! - unknown and malformed identifiers both answer 404
//! - a unique-name collision answers 409
//! - anything else from the backend answers 500
//!
//! Storage sits behind the [`store::CatalogStore`] trait with two backends: a
//! PostgreSQL pool via SQLx for production and an in-memory catalog for tests
//! and local runs.
//!
//! ## Framework Stack
//!
//! - **Axum**: Modern, ergonomic web framework
//! - **SQLx**: Async PostgreSQL driver and migrations
//! - **Tower**: Middleware and service abstractions

pub mod api;
pub mod config;
pub mod features;
pub mod middleware;
pub mod store;

// Re-export commonly used types
pub use api::{ApiError, ApiResult};
pub use store::{Catalog, CatalogStore, StoreError};
