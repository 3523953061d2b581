//! Paginated forest listing
//!
//! `GET /api/forests?page=N&size=M` answers `{count, data}` where `count` is
//! the total across all pages and `data` is the requested page in creation
//! order. Listing entries keep the bare continent id; only the single-item
//! view expands it.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::store::{Catalog, Forest, PageParams};

/// Query string of `GET /api/forests`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListForestsQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Response body of `GET /api/forests`
#[derive(Debug, Clone, Serialize)]
pub struct ListForestsResponse {
    pub count: i64,
    pub data: Vec<Forest>,
}

#[tracing::instrument(skip(catalog))]
pub async fn handle(
    catalog: &Catalog,
    query: ListForestsQuery,
) -> Result<ListForestsResponse, ApiError> {
    let page = catalog
        .list_forests(PageParams::new(query.page, query.size))
        .await?;

    Ok(ListForestsResponse {
        count: page.total,
        data: page.items,
    })
}
