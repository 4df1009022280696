//! Item Uploader service
//!
//! Stores JSON-serialized items in an S3 bucket under `items/<id>.json`.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Item validation, serialization and upload
pub mod items;

/// Object storage capability and its S3 implementation
pub mod object_store;

/// HTTP routes
pub mod routes;

/// HTTP server
pub mod server;

/// Environment configuration and API error types
pub mod types;
