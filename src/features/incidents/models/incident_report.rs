use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::INCIDENT_REPORT_TYPE;

/// Attack category enum matching the content-store schema values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AttackType {
    Phishing,
    #[serde(rename = "Malware/Ransomware")]
    MalwareRansomware,
    #[serde(rename = "Data Breach")]
    DataBreach,
    #[serde(rename = "Cyberbullying/Harassment")]
    CyberbullyingHarassment,
    Other,
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackType::Phishing => write!(f, "Phishing"),
            AttackType::MalwareRansomware => write!(f, "Malware/Ransomware"),
            AttackType::DataBreach => write!(f, "Data Breach"),
            AttackType::CyberbullyingHarassment => write!(f, "Cyberbullying/Harassment"),
            AttackType::Other => write!(f, "Other"),
        }
    }
}

/// Incident report status enum matching the content-store schema values.
///
/// Every report starts at `New`; moving between `InReview` and `Resolved`
/// is done by administrative tooling directly against the store, never by
/// this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    New,
    InReview,
    Resolved,
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::New => write!(f, "new"),
            IncidentStatus::InReview => write!(f, "in_review"),
            IncidentStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Reference to a previously uploaded binary asset:
/// `{ "_type": "file", "asset": { "_type": "reference", "_ref": <id> } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceFileRef {
    #[serde(rename = "_type")]
    pub ref_type: String,
    pub asset: AssetRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_type")]
    pub ref_type: String,
    #[serde(rename = "_ref")]
    pub asset_id: String,
}

impl EvidenceFileRef {
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self {
            ref_type: "file".to_string(),
            asset: AssetRef {
                ref_type: "reference".to_string(),
                asset_id: asset_id.into(),
            },
        }
    }
}

/// The document persisted into the content store for each submission.
///
/// `submitted_at` and `status` are always server-assigned here; the asset
/// behind `evidence_file` must already exist in the store (this service
/// only records the reference, it never uploads binary data itself).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReportDoc {
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub submitted_at: DateTime<Utc>,
    pub full_name: String,
    pub email_address: String,
    pub attack_type: AttackType,
    pub description: String,
    pub status: IncidentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_file: Option<EvidenceFileRef>,
}

impl IncidentReportDoc {
    /// Build a new report document with server time and initial status.
    pub fn new(
        full_name: String,
        email_address: String,
        attack_type: AttackType,
        description: String,
        evidence_asset_id: Option<String>,
    ) -> Self {
        Self {
            doc_type: INCIDENT_REPORT_TYPE.to_string(),
            submitted_at: Utc::now(),
            full_name,
            email_address,
            attack_type,
            description,
            status: IncidentStatus::New,
            evidence_file: evidence_asset_id.map(EvidenceFileRef::new),
        }
    }
}
