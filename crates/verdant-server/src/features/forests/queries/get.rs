//! Get forest by id
//!
//! The single-item view expands the continent link: when the referenced
//! continent exists its full record replaces the bare id in the response.
//! A dangling reference stays a bare id rather than failing the request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::ApiError;
use crate::store::{self, Catalog, Continent, Forest, StoreError};

/// Continent slot of a [`ForestView`]: expanded when resolvable
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ContinentRef {
    Embedded(Continent),
    Id(Uuid),
}

/// Response body of `GET /api/forests/:id`
#[derive(Debug, Clone, Serialize)]
pub struct ForestView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<ContinentRef>,
}

impl ForestView {
    fn assemble(forest: Forest, continent: Option<ContinentRef>) -> Self {
        Self {
            id: forest.id,
            name: forest.name,
            location: forest.location,
            kind: forest.kind,
            description: forest.description,
            timestamp: forest.timestamp,
            continent,
        }
    }
}

#[tracing::instrument(skip(catalog), fields(id = %raw_id))]
pub async fn handle(catalog: &Catalog, raw_id: &str) -> Result<ForestView, ApiError> {
    let id = store::parse_id(raw_id)?;
    let forest = catalog.find_forest(id).await?;

    let continent = match forest.continent {
        Some(continent_id) => match catalog.find_continent(continent_id).await {
            Ok(continent) => Some(ContinentRef::Embedded(continent)),
            Err(StoreError::NotFound(_)) => Some(ContinentRef::Id(continent_id)),
            Err(other) => return Err(other.into()),
        },
        None => None,
    };

    Ok(ForestView::assemble(forest, continent))
}
