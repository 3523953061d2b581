//! Create forest command
//!
//! `name`, `location`, `type` and `description` are all required, and the
//! description must carry at least ten characters. The optional `continent`
//! reference is stored as given, without checking that it resolves — a
//! relaxed link by contract.

use serde::Deserialize;
use uuid::Uuid;

use crate::api::ApiError;
use crate::features::forests::MIN_DESCRIPTION_LENGTH;
use crate::features::shared::{check_min_length, is_blank, ValidationError};
use crate::store::{Catalog, Forest, NewForest};

/// Payload of `POST /api/forests`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForestCommand {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub continent: Option<Uuid>,
}

impl CreateForestCommand {
    /// Validate the payload into storable fields
    pub fn validate(self) -> Result<NewForest, ValidationError> {
        let mut missing = Vec::new();
        if is_blank(self.name.as_deref()) {
            missing.push("name");
        }
        if is_blank(self.location.as_deref()) {
            missing.push("location");
        }
        if is_blank(self.kind.as_deref()) {
            missing.push("type");
        }
        if is_blank(self.description.as_deref()) {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let description = self.description.unwrap_or_default();
        check_min_length("description", &description, MIN_DESCRIPTION_LENGTH)?;

        Ok(NewForest {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            description,
            continent: self.continent,
        })
    }
}

#[tracing::instrument(skip(catalog, command))]
pub async fn handle(catalog: &Catalog, command: CreateForestCommand) -> Result<Forest, ApiError> {
    let new = command.validate()?;
    let forest = catalog.create_forest(new).await?;

    tracing::info!(forest_id = %forest.id, name = %forest.name, "Forest created");
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCatalog;
    use std::sync::Arc;

    fn full_command(name: &str) -> CreateForestCommand {
        CreateForestCommand {
            name: Some(name.to_string()),
            location: Some("Olympic Peninsula".to_string()),
            kind: Some("Rain Forest".to_string()),
            description: Some("Temperate rain forest with record rainfall".to_string()),
            continent: None,
        }
    }

    #[test]
    fn test_validation_each_required_field() {
        let missing_name = CreateForestCommand {
            name: None,
            ..full_command("Hoh")
        };
        assert_eq!(
            missing_name.validate().unwrap_err(),
            ValidationError::MissingFields(vec!["name"])
        );

        let missing_location = CreateForestCommand {
            location: None,
            ..full_command("Hoh")
        };
        assert!(missing_location.validate().is_err());

        let missing_kind = CreateForestCommand {
            kind: None,
            ..full_command("Hoh")
        };
        assert!(missing_kind.validate().is_err());

        let missing_description = CreateForestCommand {
            description: None,
            ..full_command("Hoh")
        };
        assert!(missing_description.validate().is_err());
    }

    #[test]
    fn test_validation_collects_all_missing_fields() {
        let cmd = CreateForestCommand {
            name: None,
            location: None,
            kind: None,
            description: Some("a perfectly long description".to_string()),
            continent: None,
        };
        assert_eq!(
            cmd.validate().unwrap_err(),
            ValidationError::MissingFields(vec!["name", "location", "type"])
        );
    }

    #[test]
    fn test_validation_short_description() {
        let cmd = CreateForestCommand {
            description: Some("too short".to_string()),
            ..full_command("Hoh")
        };
        assert_eq!(
            cmd.validate().unwrap_err(),
            ValidationError::TooShort {
                field: "description",
                min: MIN_DESCRIPTION_LENGTH
            }
        );
    }

    #[tokio::test]
    async fn test_handle_assigns_timestamp() {
        let catalog: Catalog = Arc::new(MemoryCatalog::new());
        let forest = handle(&catalog, full_command("Hoh")).await.unwrap();
        assert_eq!(forest.name, "Hoh");
        assert!(forest.timestamp <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn test_handle_stores_unresolved_continent_reference() {
        let catalog: Catalog = Arc::new(MemoryCatalog::new());
        let dangling = Uuid::new_v4();
        let cmd = CreateForestCommand {
            continent: Some(dangling),
            ..full_command("Hoh")
        };
        let forest = handle(&catalog, cmd).await.unwrap();
        assert_eq!(forest.continent, Some(dangling));
    }

    #[tokio::test]
    async fn test_handle_duplicate_name() {
        let catalog: Catalog = Arc::new(MemoryCatalog::new());
        handle(&catalog, full_command("Hoh")).await.unwrap();
        let result = handle(&catalog, full_command("Hoh")).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }
}
