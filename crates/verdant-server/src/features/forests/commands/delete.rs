//! Delete forest command

use crate::api::ApiError;
use crate::store::{self, Catalog};

#[tracing::instrument(skip(catalog), fields(id = %raw_id))]
pub async fn handle(catalog: &Catalog, raw_id: &str) -> Result<(), ApiError> {
    let id = store::parse_id(raw_id)?;
    catalog.delete_forest(id).await?;

    tracing::info!(forest_id = %id, "Forest deleted");
    Ok(())
}
