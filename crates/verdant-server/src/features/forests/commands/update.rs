//! Update forest command
//!
//! Partial update with the constrained fields re-validated: a present
//! `description` must still satisfy the minimum length, and present required
//! fields cannot be blanked.

use serde::Deserialize;
use uuid::Uuid;

use crate::api::ApiError;
use crate::features::forests::MIN_DESCRIPTION_LENGTH;
use crate::features::shared::{check_min_length, is_blank, ValidationError};
use crate::store::{self, Catalog, Forest, ForestPatch};

/// Payload of `PUT /api/forests/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateForestCommand {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub continent: Option<Uuid>,
}

impl UpdateForestCommand {
    pub fn validate(self) -> Result<ForestPatch, ValidationError> {
        if self.name.is_none()
            && self.location.is_none()
            && self.kind.is_none()
            && self.description.is_none()
            && self.continent.is_none()
        {
            return Err(ValidationError::EmptyUpdate);
        }

        let mut blanked = Vec::new();
        if self.name.is_some() && is_blank(self.name.as_deref()) {
            blanked.push("name");
        }
        if self.location.is_some() && is_blank(self.location.as_deref()) {
            blanked.push("location");
        }
        if self.kind.is_some() && is_blank(self.kind.as_deref()) {
            blanked.push("type");
        }
        if self.description.is_some() && is_blank(self.description.as_deref()) {
            blanked.push("description");
        }
        if !blanked.is_empty() {
            return Err(ValidationError::MissingFields(blanked));
        }

        if let Some(ref description) = self.description {
            check_min_length("description", description, MIN_DESCRIPTION_LENGTH)?;
        }

        Ok(ForestPatch {
            name: self.name,
            location: self.location,
            kind: self.kind,
            description: self.description,
            continent: self.continent,
        })
    }
}

#[tracing::instrument(skip(catalog, command), fields(id = %raw_id))]
pub async fn handle(
    catalog: &Catalog,
    raw_id: &str,
    command: UpdateForestCommand,
) -> Result<Forest, ApiError> {
    let id = store::parse_id(raw_id)?;
    let patch = command.validate()?;
    let forest = catalog.update_forest(id, patch).await?;

    tracing::info!(forest_id = %forest.id, "Forest updated");
    Ok(forest)
}
