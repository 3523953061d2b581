//! Forest API routes
//!
//! - `POST /api/forests` — create (200, 400, 409)
//! - `GET /api/forests` — paginated listing, `{count, data}` (200)
//! - `GET /api/forests/:id` — fetch with continent expanded (200, 404)
//! - `PUT /api/forests/:id` — partial update (200, 400, 404, 409)
//! - `DELETE /api/forests/:id` — delete (204, 404)
//! - `DELETE /api/forests` — fixed 400, storage never touched

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::commands::{self, CreateForestCommand, UpdateForestCommand};
use super::queries::{self, ListForestsQuery};
use crate::api::ApiError;
use crate::features::AppState;

/// Creates the forests router with all routes configured
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_forests)
                .post(create_forest)
                .delete(delete_collection),
        )
        .route(
            "/:id",
            get(get_forest).put(update_forest).delete(delete_forest),
        )
}

async fn create_forest(
    State(state): State<AppState>,
    Json(command): Json<CreateForestCommand>,
) -> Result<Response, ApiError> {
    let forest = commands::create::handle(&state.catalog, command).await?;
    Ok((StatusCode::OK, Json(forest)).into_response())
}

async fn list_forests(
    State(state): State<AppState>,
    Query(query): Query<ListForestsQuery>,
) -> Result<Response, ApiError> {
    let page = queries::list::handle(&state.catalog, query).await?;
    Ok((StatusCode::OK, Json(page)).into_response())
}

async fn get_forest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let forest = queries::get::handle(&state.catalog, &id).await?;
    Ok((StatusCode::OK, Json(forest)).into_response())
}

async fn update_forest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(command): Json<UpdateForestCommand>,
) -> Result<Response, ApiError> {
    let forest = commands::update::handle(&state.catalog, &id, command).await?;
    Ok((StatusCode::OK, Json(forest)).into_response())
}

async fn delete_forest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    commands::delete::handle(&state.catalog, &id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// `DELETE` on the collection root carries no identifier; answer the fixed
/// 400 without consulting storage.
async fn delete_collection() -> ApiError {
    ApiError::MissingId
}
