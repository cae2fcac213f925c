use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::features::incidents::dtos::SubmitIncidentDto;
use crate::features::incidents::models::AttackType;
use crate::modules::content_store::{ContentStore, CreatedDocument, StoreError};
use crate::shared::types::ApiResponse;

/// A user-selected evidence file, as it comes out of a file picker.
/// No size or type limits are enforced here; documented limits are
/// advisory only.
#[derive(Debug, Clone)]
pub struct EvidenceFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Collected form fields for one submission.
#[derive(Debug, Clone)]
pub struct IncidentForm {
    pub full_name: String,
    pub email_address: String,
    pub attack_type: AttackType,
    pub description: String,
    pub evidence: Option<EvidenceFile>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// Id of the created report document
    pub document_id: String,
    /// Server-provided confirmation message
    pub message: String,
}

/// Failure modes of the two-phase submission. Each is distinct, but all
/// collapse to a single "submission failed" notification for the user.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Evidence upload failed: {0}")]
    Upload(#[source] StoreError),

    #[error("Could not reach the submission endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Unexpected endpoint response: {0}")]
    InvalidResponse(String),
}

impl SubmissionError {
    /// The message a notification toast would show for this failure.
    /// Endpoint-provided messages pass through; everything else gets a
    /// generic description.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected(message) => message.clone(),
            _ => "An error occurred while submitting your report.".to_string(),
        }
    }
}

/// Orchestrates the two-phase submission: optional evidence upload against
/// the content store's asset API, then a JSON POST to the ingestion
/// endpoint.
///
/// The phases are strictly sequential, and an upload failure aborts the
/// whole submission — the endpoint is never called with a report that
/// silently lost its evidence. Note the two calls are not transactional:
/// an asset uploaded before a failed document create stays in the store.
pub struct SubmissionClient {
    endpoint_url: Url,
    http_client: reqwest::Client,
    store: Arc<dyn ContentStore>,
}

impl SubmissionClient {
    pub fn new(endpoint_url: Url, store: Arc<dyn ContentStore>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint_url, store)
    }

    pub fn with_client(
        http_client: reqwest::Client,
        endpoint_url: Url,
        store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            endpoint_url,
            http_client,
            store,
        }
    }

    /// Submit one incident report.
    ///
    /// Suspends at most twice: once for the asset upload (when a file is
    /// present) and once for the endpoint POST. No retry, no timeout beyond
    /// the HTTP client's defaults.
    pub async fn submit(&self, form: IncidentForm) -> Result<SubmissionReceipt, SubmissionError> {
        let evidence_file_asset_id = match form.evidence {
            Some(file) => {
                let asset_id = self
                    .store
                    .upload_asset(file.data, &file.file_name, &file.content_type)
                    .await
                    .map_err(SubmissionError::Upload)?;
                tracing::debug!("Evidence uploaded as asset {}", asset_id);
                Some(asset_id)
            }
            None => None,
        };

        let envelope = SubmitIncidentDto {
            full_name: form.full_name,
            email_address: form.email_address,
            attack_type: form.attack_type,
            description: form.description,
            evidence_file_asset_id,
        };

        let response = self
            .http_client
            .post(self.endpoint_url.clone())
            .json(&envelope)
            .send()
            .await?;

        let outcome = response
            .json::<ApiResponse<CreatedDocument>>()
            .await
            .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;

        if !outcome.success {
            return Err(SubmissionError::Rejected(
                outcome
                    .message
                    .unwrap_or_else(|| "Please try again later.".to_string()),
            ));
        }

        let created = outcome.data.ok_or_else(|| {
            SubmissionError::InvalidResponse("success response without data".to_string())
        })?;

        Ok(SubmissionReceipt {
            document_id: created.id,
            message: outcome
                .message
                .unwrap_or_else(|| "Report submitted!".to_string()),
        })
    }
}
