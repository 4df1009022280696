//! Object storage capability used by the item handler
mod error;

use std::sync::Arc;

use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use tracing::{debug, error};

pub use error::{ObjectStoreError, ObjectStoreResult};

/// Capability to write a single object into a bucket
///
/// This is the only storage operation the handler needs, so tests can swap the
/// S3 client for an in-memory recorder.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes `body` under `key` in `bucket`, replacing any existing object
    ///
    /// # Errors
    ///
    /// Returns `ObjectStoreError` if the write is rejected or cannot be sent
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> ObjectStoreResult<()>;
}

/// S3-backed object store
pub struct S3ObjectStore {
    s3_client: Arc<S3Client>,
}

impl S3ObjectStore {
    /// Creates a new store around a pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> ObjectStoreResult<()> {
        let len = body.len();

        self.s3_client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                error!(bucket, key, "S3 put_object failed: {e}");
                ObjectStoreError::from(e)
            })?;

        debug!(bucket, key, bytes = len, "object written");
        Ok(())
    }
}

/// In-memory test doubles for [`ObjectStore`]
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::sync::{Mutex, PoisonError};

    use super::{ObjectStore, ObjectStoreError, ObjectStoreResult};

    /// A single recorded `put_object` invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PutObjectCall {
        /// Target bucket
        pub bucket: String,
        /// Object key
        pub key: String,
        /// Object body
        pub body: Vec<u8>,
    }

    /// In-memory store that records every write attempt
    ///
    /// When built with [`RecordingObjectStore::failing`] every call is still
    /// recorded and then rejected with [`ObjectStoreError::Other`].
    #[derive(Debug, Default)]
    pub struct RecordingObjectStore {
        fail_with: Option<String>,
        calls: Mutex<Vec<PutObjectCall>>,
    }

    impl RecordingObjectStore {
        /// Store that accepts every write
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Store that rejects every write with `message`
        #[must_use]
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                fail_with: Some(message.into()),
                calls: Mutex::default(),
            }
        }

        /// Snapshot of the recorded calls, oldest first
        #[must_use]
        pub fn calls(&self) -> Vec<PutObjectCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of recorded calls
        #[must_use]
        pub fn call_count(&self) -> usize {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }
    }

    #[async_trait::async_trait]
    impl ObjectStore for RecordingObjectStore {
        async fn put_object(
            &self,
            bucket: &str,
            key: &str,
            body: Vec<u8>,
        ) -> ObjectStoreResult<()> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(PutObjectCall {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    body,
                });

            match &self.fail_with {
                Some(message) => Err(ObjectStoreError::Other(message.clone())),
                None => Ok(()),
            }
        }
    }
}
