//! Narrow capability interface over the external headless content store.
//!
//! The store owns all persistence: documents, binary assets, schema
//! validation and read replication. This crate only needs two write
//! operations from it, so the trait is kept to exactly those two — which
//! also makes the ingestion path testable against an in-memory fake.

mod http_client;
mod memory;

pub use http_client::HttpContentStore;
pub use memory::{InMemoryContentStore, StoredAsset};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from content-store operations.
///
/// Full detail (status codes, response bodies) is logged server-side;
/// callers convert these into generic user-facing failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Content store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Content store API error: HTTP {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected content store response: {0}")]
    Decode(String),
}

/// Result of a successful document create.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedDocument {
    /// Store-assigned document id
    pub id: String,
    /// The document as persisted, when the store returns it
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub document: Option<serde_json::Value>,
}

/// The two store capabilities the submission workflow depends on.
///
/// `upload_asset` creates a permanent binary object and returns its opaque
/// id; `create_document` persists one structured document. The two calls are
/// not transactionally linked — see the orphaned-asset note in DESIGN.md.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Upload a binary asset, tagged as a generic file.
    /// Returns the opaque asset id assigned by the store.
    async fn upload_asset(
        &self,
        data: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<String, StoreError>;

    /// Create a single document in the store.
    async fn create_document(
        &self,
        doc: serde_json::Value,
    ) -> Result<CreatedDocument, StoreError>;
}
