use utoipa::{Modify, OpenApi};

use crate::features::incidents::{
    dtos as incidents_dtos, handlers as incidents_handlers, models as incidents_models,
};
use crate::modules::content_store::CreatedDocument;
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Incidents (public)
        incidents_handlers::submit_incident,
    ),
    components(
        schemas(
            // Incidents
            incidents_dtos::SubmitIncidentDto,
            incidents_models::AttackType,
            incidents_models::IncidentStatus,
            CreatedDocument,
            ApiResponse<CreatedDocument>,
        )
    ),
    tags(
        (name = "incidents", description = "Incident report submission (public)"),
    ),
    info(
        title = "CyberSecure Incident API",
        version = "0.1.0",
        description = "Incident report ingestion for the CyberSecure awareness society",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
