use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::modules::content_store::{ContentStore, CreatedDocument, StoreError};

/// Stored asset metadata (the fake does not keep the payload around).
#[derive(Debug, Clone)]
pub struct StoredAsset {
    pub id: String,
    pub filename: String,
    pub content_type: String,
    pub size: usize,
}

/// In-memory `ContentStore` for tests and credential-less local runs.
///
/// Failure switches simulate store outages at either phase of the
/// upload-then-create workflow, which is how the orphaned-asset window
/// gets regression-tested.
#[derive(Default)]
pub struct InMemoryContentStore {
    documents: Mutex<Vec<Value>>,
    assets: Mutex<HashMap<String, StoredAsset>>,
    fail_uploads: AtomicBool,
    fail_creates: AtomicBool,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `upload_asset` calls fail.
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `create_document` calls fail.
    pub fn set_fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all documents created so far.
    pub fn documents(&self) -> Vec<Value> {
        self.documents.lock().unwrap().clone()
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    /// Snapshot of all uploaded assets.
    pub fn assets(&self) -> Vec<StoredAsset> {
        self.assets.lock().unwrap().values().cloned().collect()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn upload_asset(
        &self,
        data: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<String, StoreError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StoreError::Api {
                status: 503,
                body: "simulated asset store outage".to_string(),
            });
        }

        let id = format!("file-{}", Uuid::new_v4().simple());
        self.assets.lock().unwrap().insert(
            id.clone(),
            StoredAsset {
                id: id.clone(),
                filename: filename.to_string(),
                content_type: content_type.to_string(),
                size: data.len(),
            },
        );
        Ok(id)
    }

    async fn create_document(&self, doc: Value) -> Result<CreatedDocument, StoreError> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(StoreError::Api {
                status: 500,
                body: "simulated document store outage".to_string(),
            });
        }

        let id = Uuid::new_v4().to_string();
        let mut stored = doc;
        if let Some(obj) = stored.as_object_mut() {
            obj.insert("_id".to_string(), Value::String(id.clone()));
        }
        self.documents.lock().unwrap().push(stored.clone());

        Ok(CreatedDocument {
            id,
            document: Some(stored),
        })
    }
}
