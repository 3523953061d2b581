//! PostgreSQL storage backend
//!
//! Name uniqueness is enforced by unique indexes; violations surface as
//! [`StoreError::Duplicate`]. Listing order comes from a monotonic `seq`
//! column assigned at insert, so pages are stable creation order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use uuid::Uuid;

use crate::config::DatabaseConfig;

use super::{
    CatalogStore, Continent, ContinentPatch, Forest, ForestPage, ForestPatch, NewContinent,
    NewForest, PageParams, StoreError,
};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// PostgreSQL-backed [`CatalogStore`]
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a connection pool from configuration and run pending migrations
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(e.into()))?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connection pool established"
        );

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a sqlx error, turning unique violations into `Duplicate`
fn map_insert_error(error: sqlx::Error, resource: &'static str, name: &str) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = error {
        if db_err.is_unique_violation() {
            return StoreError::Duplicate {
                resource,
                name: name.to_string(),
            };
        }
    }
    StoreError::Backend(error)
}

/// Map a sqlx error from an `UPDATE ... RETURNING` statement
///
/// The row was read just before, so `RowNotFound` here means a concurrent
/// delete won the race; that is still a 404, not a backend failure.
fn map_update_error(error: sqlx::Error, resource: &'static str, name: &str) -> StoreError {
    match error {
        sqlx::Error::RowNotFound => StoreError::NotFound(resource),
        other => map_insert_error(other, resource, name),
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ContinentRow {
    id: Uuid,
    name: String,
    keywords: Vec<String>,
}

impl From<ContinentRow> for Continent {
    fn from(row: ContinentRow) -> Self {
        Continent {
            id: row.id,
            name: row.name,
            keywords: row.keywords,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ForestRow {
    id: Uuid,
    name: String,
    location: String,
    kind: String,
    description: String,
    created_at: DateTime<Utc>,
    continent_id: Option<Uuid>,
}

impl From<ForestRow> for Forest {
    fn from(row: ForestRow) -> Self {
        Forest {
            id: row.id,
            name: row.name,
            location: row.location,
            kind: row.kind,
            description: row.description,
            timestamp: row.created_at,
            continent: row.continent_id,
        }
    }
}

const CONTINENT_COLUMNS: &str = "id, name, keywords";
const FOREST_COLUMNS: &str = "id, name, location, kind, description, created_at, continent_id";

#[async_trait]
impl CatalogStore for PgCatalog {
    async fn create_continent(&self, new: NewContinent) -> Result<Continent, StoreError> {
        let row = sqlx::query_as::<_, ContinentRow>(&format!(
            "INSERT INTO continents (name, keywords) VALUES ($1, $2) RETURNING {CONTINENT_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.keywords)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "continent", &new.name))?;

        Ok(row.into())
    }

    async fn find_continent(&self, id: Uuid) -> Result<Continent, StoreError> {
        let row = sqlx::query_as::<_, ContinentRow>(&format!(
            "SELECT {CONTINENT_COLUMNS} FROM continents WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("continent"))?;

        Ok(row.into())
    }

    async fn update_continent(
        &self,
        id: Uuid,
        patch: ContinentPatch,
    ) -> Result<Continent, StoreError> {
        let current = self.find_continent(id).await?;
        let name = patch.name.unwrap_or(current.name);
        let keywords = patch.keywords.unwrap_or(current.keywords);

        let row = sqlx::query_as::<_, ContinentRow>(&format!(
            "UPDATE continents SET name = $2, keywords = $3 WHERE id = $1 \
             RETURNING {CONTINENT_COLUMNS}"
        ))
        .bind(id)
        .bind(&name)
        .bind(&keywords)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_update_error(e, "continent", &name))?;

        Ok(row.into())
    }

    async fn delete_continent(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, Uuid>("DELETE FROM continents WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("continent"))?;
        Ok(())
    }

    async fn create_forest(&self, new: NewForest) -> Result<Forest, StoreError> {
        let row = sqlx::query_as::<_, ForestRow>(&format!(
            "INSERT INTO forests (name, location, kind, description, continent_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {FOREST_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.location)
        .bind(&new.kind)
        .bind(&new.description)
        .bind(new.continent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "forest", &new.name))?;

        Ok(row.into())
    }

    async fn find_forest(&self, id: Uuid) -> Result<Forest, StoreError> {
        let row = sqlx::query_as::<_, ForestRow>(&format!(
            "SELECT {FOREST_COLUMNS} FROM forests WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("forest"))?;

        Ok(row.into())
    }

    async fn list_forests(&self, page: PageParams) -> Result<ForestPage, StoreError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM forests")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, ForestRow>(&format!(
            "SELECT {FOREST_COLUMNS} FROM forests ORDER BY seq LIMIT $1 OFFSET $2"
        ))
        .bind(page.size())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(ForestPage {
            total,
            items: rows.into_iter().map(Forest::from).collect(),
        })
    }

    async fn update_forest(&self, id: Uuid, patch: ForestPatch) -> Result<Forest, StoreError> {
        let current = self.find_forest(id).await?;
        let name = patch.name.unwrap_or(current.name);
        let location = patch.location.unwrap_or(current.location);
        let kind = patch.kind.unwrap_or(current.kind);
        let description = patch.description.unwrap_or(current.description);
        let continent = patch.continent.or(current.continent);

        let row = sqlx::query_as::<_, ForestRow>(&format!(
            "UPDATE forests SET name = $2, location = $3, kind = $4, description = $5, \
             continent_id = $6 WHERE id = $1 RETURNING {FOREST_COLUMNS}"
        ))
        .bind(id)
        .bind(&name)
        .bind(&location)
        .bind(&kind)
        .bind(&description)
        .bind(continent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_update_error(e, "forest", &name))?;

        Ok(row.into())
    }

    async fn delete_forest(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, Uuid>("DELETE FROM forests WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("forest"))?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
