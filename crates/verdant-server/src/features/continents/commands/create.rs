//! Create continent command
//!
//! `name` is required and unique; `keywords` defaults to an empty list and
//! its order is preserved exactly as submitted.

use serde::Deserialize;

use crate::api::ApiError;
use crate::features::shared::{is_blank, ValidationError};
use crate::store::{Catalog, Continent, NewContinent};

/// Payload of `POST /api/continents`
///
/// Required fields are `Option` so their absence reaches validation and
/// answers 400 instead of failing body deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContinentCommand {
    pub name: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl CreateContinentCommand {
    /// Validate the payload into storable fields
    pub fn validate(self) -> Result<NewContinent, ValidationError> {
        if is_blank(self.name.as_deref()) {
            return Err(ValidationError::MissingFields(vec!["name"]));
        }
        Ok(NewContinent {
            name: self.name.unwrap_or_default(),
            keywords: self.keywords.unwrap_or_default(),
        })
    }
}

#[tracing::instrument(skip(catalog, command))]
pub async fn handle(
    catalog: &Catalog,
    command: CreateContinentCommand,
) -> Result<Continent, ApiError> {
    let new = command.validate()?;
    let continent = catalog.create_continent(new).await?;

    tracing::info!(continent_id = %continent.id, name = %continent.name, "Continent created");
    Ok(continent)
}
