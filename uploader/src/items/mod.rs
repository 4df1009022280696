//! Item upload handler
//!
//! Validates an [`ItemRequest`], serializes it to JSON and writes it to the
//! configured bucket under `items/<id>.json`. Exactly one write is attempted per
//! call, and only after validation and serialization succeed.
mod error;

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub use error::{ItemError, ItemResult};

use crate::object_store::ObjectStore;

/// Value returned by [`process`] once the object has been written
pub const CONFIRMATION: &str = "ok";

const KEY_PREFIX: &str = "items/";
const KEY_SUFFIX: &str = ".json";

/// Record to be stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ItemRequest {
    /// Item identifier, must be non-empty
    pub id: String,
    /// Opaque payload
    pub data: String,
}

/// Dependencies injected into [`process`]
///
/// Built once by the caller and shared read-only across invocations.
pub struct Deps<S: ?Sized = dyn ObjectStore> {
    /// Storage capability
    pub store: Arc<S>,
    /// Bucket receiving the items
    pub bucket: String,
}

impl<S: ?Sized> Deps<S> {
    /// Creates a new set of dependencies
    #[must_use]
    pub const fn new(store: Arc<S>, bucket: String) -> Self {
        Self { store, bucket }
    }
}

impl<S: ?Sized> Clone for Deps<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            bucket: self.bucket.clone(),
        }
    }
}

/// Maps an item identifier to its object key
#[must_use]
pub fn item_key(id: &str) -> String {
    format!("{KEY_PREFIX}{id}{KEY_SUFFIX}")
}

/// Validates, serializes and stores `request`
///
/// # Errors
///
/// Returns `ItemError::MissingId` if the identifier is empty (no write is made)
/// Returns `ItemError::Marshal` if the request cannot be serialized
/// Returns `ItemError::Put` if the object store rejects the write
#[instrument(skip(deps, request), fields(item_id = %request.id, bucket = %deps.bucket))]
pub async fn process<S>(deps: &Deps<S>, request: &ItemRequest) -> ItemResult<&'static str>
where
    S: ObjectStore + ?Sized,
{
    if request.id.is_empty() {
        return Err(ItemError::MissingId);
    }

    let body = serde_json::to_vec(request).map_err(ItemError::Marshal)?;
    let key = item_key(&request.id);

    deps.store.put_object(&deps.bucket, &key, body).await?;

    tracing::info!("stored item at {key}");

    Ok(CONFIRMATION)
}
