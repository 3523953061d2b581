//! Continent API routes
//!
//! - `POST /api/continents` — create (200, 400, 409)
//! - `GET /api/continents/:id` — fetch (200, 404)
//! - `PUT /api/continents/:id` — partial update (200, 400, 404, 409)
//! - `DELETE /api/continents/:id` — delete (204, 404)
//! - `DELETE /api/continents` — fixed 400, storage never touched

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::commands::{self, CreateContinentCommand, UpdateContinentCommand};
use super::queries;
use crate::api::ApiError;
use crate::features::AppState;

/// Creates the continents router with all routes configured
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_continent).delete(delete_collection))
        .route(
            "/:id",
            get(get_continent)
                .put(update_continent)
                .delete(delete_continent),
        )
}

async fn create_continent(
    State(state): State<AppState>,
    Json(command): Json<CreateContinentCommand>,
) -> Result<Response, ApiError> {
    let continent = commands::create::handle(&state.catalog, command).await?;
    Ok((StatusCode::OK, Json(continent)).into_response())
}

async fn get_continent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let continent = queries::get::handle(&state.catalog, &id).await?;
    Ok((StatusCode::OK, Json(continent)).into_response())
}

async fn update_continent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(command): Json<UpdateContinentCommand>,
) -> Result<Response, ApiError> {
    let continent = commands::update::handle(&state.catalog, &id, command).await?;
    Ok((StatusCode::OK, Json(continent)).into_response())
}

async fn delete_continent(
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
