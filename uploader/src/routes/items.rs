//! `POST /v1/items`

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    items::{self, Deps, ItemRequest},
    types::AppError,
};

/// Response returned once the item is stored
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateItemResponse {
    /// Confirmation token, always `ok`
    pub status: String,
}

/// Stores an item as JSON under `items/<id>.json`
///
/// # Errors
///
/// - `400 missing_id` when the item id is empty
/// - `502 storage_error` when the object store rejects the write
/// - `503 upstream_error` when the object store is unavailable
#[instrument(skip(deps, payload))]
pub async fn create_item(
    Extension(deps): Extension<Deps>,
    Json(payload): Json<ItemRequest>,
) -> Result<Json<CreateItemResponse>, AppError> {
    let confirmation = items::process(&deps, &payload).await?;

    Ok(Json(CreateItemResponse {
        status: confirmation.to_string(),
    }))
}
