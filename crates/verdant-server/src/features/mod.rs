//! Feature modules
//!
//! One module per HTTP resource, each with `routes`, `commands` (writes) and
//! `queries` (reads), plus shared validation utilities. Handlers receive the
//! storage handle through [`AppState`]; nothing here holds state of its own.

pub mod continents;
pub mod forests;
pub mod shared;

use axum::Router;

use crate::store::Catalog;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// Build the `/api` resource router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/continents", continents::routes())
        .nest("/forests", forests::routes())
        .with_state(state)
}
