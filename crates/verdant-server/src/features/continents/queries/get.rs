//! Get continent by id

use crate::api::ApiError;
use crate::store::{self, Catalog, Continent};

#[tracing::instrument(skip(catalog), fields(id = %raw_id))]
pub async fn handle(catalog: &Catalog, raw_id: &str) -> Result<Continent, ApiError> {
    let id = store::parse_id(raw_id)?;
    let continent = catalog.find_continent(id).await?;
    Ok(continent)
}
