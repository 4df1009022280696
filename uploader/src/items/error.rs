//! Error types for item processing

use thiserror::Error;

use crate::object_store::ObjectStoreError;

/// Result type for item processing
pub type ItemResult<T> = Result<T, ItemError>;

/// Errors returned by [`super::process`], one per failing stage
#[derive(Error, Debug)]
pub enum ItemError {
    /// The request carried an empty identifier
    #[error("missing id")]
    MissingId,

    /// The request could not be serialized to JSON
    #[error("marshal: {0}")]
    Marshal(#[source] serde_json::Error),

    /// The object store rejected the write
    #[error("s3 put: {0}")]
    Put(#[source] ObjectStoreError),
}

impl From<ObjectStoreError> for ItemError {
    fn from(error: ObjectStoreError) -> Self {
        Self::Put(error)
    }
}
