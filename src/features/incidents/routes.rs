use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::incidents::handlers::{method_not_allowed, submit_incident};
use crate::features::incidents::services::IncidentService;

/// Create routes for the incidents feature.
///
/// The submission path accepts POST only; every other method falls through
/// to a 405 handler without touching the content store.
pub fn routes(incident_service: Arc<IncidentService>) -> Router {
    Router::new()
        .route(
            "/api/incidents",
            post(submit_incident).fallback(method_not_allowed),
        )
        .with_state(incident_service)
}
