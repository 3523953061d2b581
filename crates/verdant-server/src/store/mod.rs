//! Storage adapter for the forest catalog
//!
//! The HTTP layer never talks to a storage engine directly; it goes through
//! the [`CatalogStore`] trait, which exposes document-style operations
//! (create, find-by-id, partial update, delete, and one paginated listing)
//! and surfaces engine outcomes as the typed [`StoreError`].
//!
//! Two backends implement the trait:
//!
//! - [`postgres::PgCatalog`] — the production backend (sqlx/PostgreSQL,
//!   unique indexes enforce name uniqueness)
//! - [`memory::MemoryCatalog`] — an embedded backend used by the test suite
//!   and for local runs without a database
//!
//! A store handle is built once at startup and injected into handlers via
//! axum state; handlers themselves hold no persistent state.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Shared handle to the active storage backend
pub type Catalog = Arc<dyn CatalogStore>;

/// Typed storage outcomes
///
/// The HTTP status for each variant is assigned in exactly one place,
/// `api::response::ApiError`. `MalformedId` is kept distinct from `NotFound`
/// even though both answer 404, so the conflation lives only in the
/// translator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given identifier
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Identifier is not in the engine's identifier format
    #[error("'{0}' is not a valid identifier")]
    MalformedId(String),

    /// Unique-name constraint violation
    #[error("{resource} named '{name}' already exists")]
    Duplicate {
        resource: &'static str,
        name: String,
    },

    /// Unexpected engine failure
    #[error("Storage backend error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Parse a path identifier into the storage id format
///
/// Malformed identifiers are reported as [`StoreError::MalformedId`] so the
/// storage taxonomy, not the handler, decides how they surface.
pub fn parse_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::MalformedId(raw.to_string()))
}

// ============================================================================
// Records
// ============================================================================

/// A stored continent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Continent {
    pub id: Uuid,
    pub name: String,
    pub keywords: Vec<String>,
}

/// Continent fields for creation; id is storage-assigned
#[derive(Debug, Clone)]
pub struct NewContinent {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Partial continent update; `None` fields are preserved unchanged
#[derive(Debug, Clone, Default)]
pub struct ContinentPatch {
    pub name: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// A stored forest
///
/// Serialized field names follow the public API: the identifier appears as
/// `_id` and the `kind` field as `type`. A linked continent serializes as its
/// bare id here; the single-item GET expands it separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<Uuid>,
}

/// Forest fields for creation; id and timestamp are storage-assigned
#[derive(Debug, Clone)]
pub struct NewForest {
    pub name: String,
    pub location: String,
    pub kind: String,
    pub description: String,
    pub continent: Option<Uuid>,
}

/// Partial forest update; `None` fields are preserved unchanged
#[derive(Debug, Clone, Default)]
pub struct ForestPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub continent: Option<Uuid>,
}

// ============================================================================
// Pagination
// ============================================================================

/// Page options for the forest listing
///
/// Pages are 1-indexed; the size defaults to 10 and is clamped to 1..=100.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self { page, size }
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(10).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        // page comes off the query string unclamped above 1, so the
        // multiplication must not overflow for huge values.
        (self.page() - 1).saturating_mul(self.size())
    }
}

/// One page of forests plus the total count across all pages
#[derive(Debug, Clone)]
pub struct ForestPage {
    pub total: i64,
    pub items: Vec<Forest>,
}

// ============================================================================
// Store contract
// ============================================================================

/// Document-style storage operations for both catalog entities
///
/// Uniqueness of `name` (per entity) is the backend's responsibility:
/// concurrent creates with the same name must resolve to exactly one success
/// and one [`StoreError::Duplicate`]. Listing order is creation order.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn create_continent(&self, new: NewContinent) -> Result<Continent, StoreError>;
    async fn find_continent(&self, id: Uuid) -> Result<Continent, StoreError>;
    async fn update_continent(
        &self,
        id: Uuid,
        patch: ContinentPatch,
    ) -> Result<Continent, StoreError>;
    async fn delete_continent(&self, id: Uuid) -> Result<(), StoreError>;

    async fn create_forest(&self, new: NewForest) -> Result<Forest, StoreError>;
    async fn find_forest(&self, id: Uuid) -> Result<Forest, StoreError>;
    async fn list_forests(&self, page: PageParams) -> Result<ForestPage, StoreError>;
    async fn update_forest(&self, id: Uuid, patch: ForestPatch) -> Result<Forest, StoreError>;
    async fn delete_forest(&self, id: Uuid) -> Result<(), StoreError>;

    /// Liveness probe for the `/health` endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(matches!(parse_id("mooshy"), Err(StoreError::MalformedId(_))));
        assert!(matches!(parse_id(""), Err(StoreError::MalformedId(_))));
    }

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.size(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_params_custom() {
        let params = PageParams::new(Some(3), Some(25));
        assert_eq!(params.page(), 3);
        assert_eq!(params.size(), 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_page_params_clamping() {
        let params = PageParams::new(Some(-2), Some(500));
        assert_eq!(params.page(), 1);
        assert_eq!(params.size(), 100);
    }

    #[test]
    fn test_page_params_offset_saturates_for_huge_pages() {
        let params = PageParams::new(Some(i64::MAX), Some(100));
        assert_eq!(params.offset(), i64::MAX);
    }

    #[test]
    fn test_forest_wire_field_names() {
        let forest = Forest {
            id: Uuid::new_v4(),
            name: "Hoh".to_string(),
            location: "Washington".to_string(),
            kind: "Rain Forest".to_string(),
            description: "Temperate rain forest on the Olympic Peninsula".to_string(),
            timestamp: Utc::now(),
            continent: None,
        };
        let value = serde_json::to_value(&forest).unwrap();
        assert!(value.get("_id").is_some());
        assert_eq!(value["type"], "Rain Forest");
        assert!(value.get("continent").is_none());
    }
}
