use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::incidents::models::AttackType;

/// Request DTO for submitting an incident report.
///
/// All fields are required except the evidence asset id, which is only
/// present when the submitter uploaded a file beforehand. The referenced
/// asset must already exist in the content store; this endpoint never
/// receives binary data.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitIncidentDto {
    /// Full name of the person reporting the incident
    #[validate(
        length(min = 1, max = 255, message = "Full name must be 1-255 characters"),
        regex(
            path = "*crate::shared::validation::FULL_NAME_REGEX",
            message = "Full name contains invalid characters"
        )
    )]
    pub full_name: String,

    /// Contact email for follow-up
    #[validate(email(message = "Invalid email format"))]
    pub email_address: String,

    /// Category of the attack
    pub attack_type: AttackType,

    /// Free-text description of what happened
    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: String,

    /// Id of a previously uploaded evidence asset, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Evidence asset id must not be empty"))]
    pub evidence_file_asset_id: Option<String>,
}
