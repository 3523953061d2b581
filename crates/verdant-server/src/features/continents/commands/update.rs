//! Update continent command
//!
//! Partial update: only the fields present in the body change, the rest are
//! preserved. An empty body is a validation failure, and renaming onto an
//! existing continent name is a conflict.

use serde::Deserialize;

use crate::api::ApiError;
use crate::features::shared::{is_blank, ValidationError};
use crate::store::{self, Catalog, Continent, ContinentPatch};

/// Payload of `PUT /api/continents/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContinentCommand {
    pub name: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl UpdateContinentCommand {
    pub fn validate(self) -> Result<ContinentPatch, ValidationError> {
        if self.name.is_none() && self.keywords.is_none() {
            return Err(ValidationError::EmptyUpdate);
        }
        if self.name.is_some() && is_blank(self.name.as_deref()) {
            return Err(ValidationError::MissingFields(vec!["name"]));
        }
        Ok(ContinentPatch {
            name: self.name,
            keywords: self.keywords,
        })
    }
}

#[tracing::instrument(skip(catalog, command), fields(id = %raw_id))]
pub async fn handle(
    catalog: &Catalog,
    raw_id: &str,
    command: UpdateContinentCommand,
) -> Result<Continent, ApiError> {
    let id = store::parse_id(raw_id)?;
    let patch = command.validate()?;
    let continent = catalog.update_continent(id, patch).await?;

    tracing::info!(continent_id = %continent.id, "Continent updated");
    Ok(continent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCatalog;
    use crate::store::NewContinent;
    use std::sync::Arc;

    async fn seeded() -> (Catalog, Continent) {
        let catalog: Catalog = Arc::new(MemoryCatalog::new());
        let continent = catalog
            .create_continent(NewContinent {
                name: "Antarctica".to_string(),
                keywords: vec!["snow".to_string(), "ice".to_string()],
            })
            .await
            .unwrap();
        (catalog, continent)
    }

    #[test]
    fn test_validation_empty_body() {
        let cmd = UpdateContinentCommand {
            name: None,
            keywords: None,
        };
        assert_eq!(cmd.validate().unwrap_err(), ValidationError::EmptyUpdate);
    }

    #[test]
    fn test_validation_blank_name() {
        let cmd = UpdateContinentCommand {
            name: Some("".to_string()),
            keywords: None,
        };
        assert!(cmd.validate().is_err());
    }

    #[tokio::test]
    async fn test_handle_preserves_unspecified_fields() {
        let (catalog, continent) = seeded().await;
        let cmd = UpdateContinentCommand {
            name: Some("South Pole".to_string()),
            keywords: None,
        };
        let updated = handle(&catalog, &continent.id.to_string(), cmd).await.unwrap();
        assert_eq!(updated.name, "South Pole");
        assert_eq!(updated.keywords, continent.keywords);
    }

    #[tokio::test]
    async fn test_handle_unknown_id() {
        let (catalog, _) = seeded().await;
        let cmd = UpdateContinentCommand {
            name: Some("Atlantis".to_string()),
            keywords: None,
        };
        let result = handle(&catalog, &uuid::Uuid::new_v4().to_string(), cmd).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_handle_malformed_id() {
        let (catalog, _) = seeded().await;
        let cmd = UpdateContinentCommand {
            name: Some("Atlantis".to_string()),
            keywords: None,
        };
        let result = handle(&catalog, "mooshy", cmd).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
