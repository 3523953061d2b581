//! Embedded in-process storage backend
//!
//! Keeps both collections in insertion-ordered vectors behind a single
//! `RwLock`, which also makes the unique-name check atomic with the insert:
//! concurrent duplicate creates serialize on the write lock, so exactly one
//! succeeds. Used by the test suite and selectable via `VERDANT_STORE=memory`
//! for running without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    CatalogStore, Continent, ContinentPatch, Forest, ForestPage, ForestPatch, NewContinent,
    NewForest, PageParams, StoreError,
};

#[derive(Default)]
struct Collections {
    continents: Vec<Continent>,
    forests: Vec<Forest>,
}

/// In-memory [`CatalogStore`] backend
#[derive(Default)]
pub struct MemoryCatalog {
    inner: RwLock<Collections>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn create_continent(&self, new: NewContinent) -> Result<Continent, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.continents.iter().any(|c| c.name == new.name) {
            return Err(StoreError::Duplicate {
                resource: "continent",
                name: new.name,
            });
        }
        let continent = Continent {
            id: Uuid::new_v4(),
            name: new.name,
            keywords: new.keywords,
        };
        inner.continents.push(continent.clone());
        Ok(continent)
    }

    async fn find_continent(&self, id: Uuid) -> Result<Continent, StoreError> {
        let inner = self.inner.read().await;
        inner
            .continents
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("continent"))
    }

    async fn update_continent(
        &self,
        id: Uuid,
        patch: ContinentPatch,
    ) -> Result<Continent, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(ref name) = patch.name {
            if inner.continents.iter().any(|c| c.id != id && c.name == *name) {
                return Err(StoreError::Duplicate {
                    resource: "continent",
                    name: name.clone(),
                });
            }
        }
        let continent = inner
            .continents
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound("continent"))?;
        if let Some(name) = patch.name {
            continent.name = name;
        }
        if let Some(keywords) = patch.keywords {
            continent.keywords = keywords;
        }
        Ok(continent.clone())
    }

    async fn delete_continent(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .continents
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound("continent"))?;
        inner.continents.remove(position);
        Ok(())
    }

    async fn create_forest(&self, new: NewForest) -> Result<Forest, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.forests.iter().any(|f| f.name == new.name) {
            return Err(StoreError::Duplicate {
                resource: "forest",
                name: new.name,
            });
        }
        let forest = Forest {
            id: Uuid::new_v4(),
            name: new.name,
            location: new.location,
            kind: new.kind,
            description: new.description,
            timestamp: Utc::now(),
            continent: new.continent,
        };
        inner.forests.push(forest.clone());
        Ok(forest)
    }

    async fn find_forest(&self, id: Uuid) -> Result<Forest, StoreError> {
        let inner = self.inner.read().await;
        inner
            .forests
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("forest"))
    }

    async fn list_forests(&self, page: PageParams) -> Result<ForestPage, StoreError> {
        let inner = self.inner.read().await;
        let total = inner.forests.len() as i64;
        let items = inner
            .forests
            .iter()
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .cloned()
            .collect();
        Ok(ForestPage { total, items })
    }

    async fn update_forest(&self, id: Uuid, patch: ForestPatch) -> Result<Forest, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(ref name) = patch.name {
            if inner.forests.iter().any(|f| f.id != id && f.name == *name) {
                return Err(StoreError::Duplicate {
                    resource: "forest",
                    name: name.clone(),
                });
            }
        }
        let forest = inner
            .forests
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(StoreError::NotFound("forest"))?;
        if let Some(name) = patch.name {
            forest.name = name;
        }
        if let Some(location) = patch.location {
            forest.location = location;
        }
        if let Some(kind) = patch.kind {
            forest.kind = kind;
        }
        if let Some(description) = patch.description {
            forest.description = description;
        }
        if let Some(continent) = patch.continent {
            forest.continent = Some(continent);
        }
        Ok(forest.clone())
    }

    async fn delete_forest(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .forests
            .iter()
            .position(|f| f.id == id)
            .ok_or(StoreError::NotFound("forest"))?;
        inner.forests.remove(position);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
