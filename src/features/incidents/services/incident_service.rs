use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::incidents::dtos::SubmitIncidentDto;
use crate::features::incidents::models::IncidentReportDoc;
use crate::modules::content_store::{ContentStore, CreatedDocument};

/// The sole write path into incident reports.
///
/// Builds the store document from validated submission fields, stamping the
/// server timestamp and the initial `new` status, and issues a single create
/// call. No retry: any failure is terminal for the request and the client
/// must re-submit.
pub struct IncidentService {
    store: Arc<dyn ContentStore>,
}

impl IncidentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, dto: SubmitIncidentDto) -> Result<CreatedDocument> {
        let doc = IncidentReportDoc::new(
            dto.full_name,
            dto.email_address,
            dto.attack_type,
            dto.description,
            dto.evidence_file_asset_id,
        );

        let value =
            serde_json::to_value(&doc).map_err(|e| AppError::Internal(e.to_string()))?;

        let created = self.store.create_document(value).await?;

        tracing::info!(
            "Incident report created: id={}, attack_type={}",
            created.id,
            doc.attack_type
        );

        Ok(created)
    }
}
