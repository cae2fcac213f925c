use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::core::config::ContentStoreConfig;
use crate::modules::content_store::{ContentStore, CreatedDocument, StoreError};

/// Asset upload response: `{ "document": { "_id": ... } }`
#[derive(Debug, Deserialize)]
struct UploadAssetResponse {
    document: AssetDocument,
}

#[derive(Debug, Deserialize)]
struct AssetDocument {
    #[serde(rename = "_id")]
    id: String,
}

/// Mutation response: `{ "results": [{ "id": ..., "document": ... }] }`
#[derive(Debug, Deserialize)]
struct MutateResponse {
    results: Vec<MutateResult>,
}

#[derive(Debug, Deserialize)]
struct MutateResult {
    id: String,
    #[serde(default)]
    document: Option<Value>,
}

/// HTTP client for the content store's write API.
///
/// Authenticates every call with the configured write token. The base URL
/// is derived from the project id unless an explicit override is configured
/// (used for tests and self-hosted deployments).
pub struct HttpContentStore {
    config: ContentStoreConfig,
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpContentStore {
    pub fn new(config: ContentStoreConfig) -> Self {
        let base_url = config
            .api_base
            .clone()
            .unwrap_or_else(|| format!("https://{}.api.sanity.io", config.project_id))
            .trim_end_matches('/')
            .to_string();

        Self {
            config,
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    fn asset_upload_url(&self, filename: &str) -> String {
        format!(
            "{}/v{}/assets/files/{}?filename={}",
            self.base_url,
            self.config.api_version,
            self.config.dataset,
            urlencoding::encode(filename)
        )
    }

    fn mutate_url(&self) -> String {
        format!(
            "{}/v{}/data/mutate/{}?returnDocuments=true",
            self.base_url, self.config.api_version, self.config.dataset
        )
    }

    async fn into_api_error(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StoreError::Api { status, body }
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn upload_asset(
        &self,
        data: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let url = self.asset_upload_url(filename);

        tracing::debug!("Uploading asset '{}' ({} bytes)", filename, data.len());

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::into_api_error(response).await;
            tracing::error!("Asset upload failed: {}", err);
            return Err(err);
        }

        let uploaded = response
            .json::<UploadAssetResponse>()
            .await
            .map_err(|e| StoreError::Decode(format!("asset upload response: {}", e)))?;

        tracing::info!("Uploaded asset: {}", uploaded.document.id);
        Ok(uploaded.document.id)
    }

    async fn create_document(&self, doc: Value) -> Result<CreatedDocument, StoreError> {
        let url = self.mutate_url();
        let body = json!({ "mutations": [{ "create": doc }] });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::into_api_error(response).await;
            tracing::error!("Document create failed: {}", err);
            return Err(err);
        }

        let mutated = response
            .json::<MutateResponse>()
            .await
            .map_err(|e| StoreError::Decode(format!("mutation response: {}", e)))?;

        let result = mutated
            .results
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("mutation response had no results".to_string()))?;

        tracing::info!("Created document: {}", result.id);
        Ok(CreatedDocument {
            id: result.id,
            document: result.document,
        })
    }
}
