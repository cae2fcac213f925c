use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::incidents::dtos::SubmitIncidentDto;
use crate::features::incidents::services::IncidentService;
use crate::modules::content_store::CreatedDocument;
use crate::shared::types::ApiResponse;
use crate::shared::validation::collect_validation_errors;

/// Submit an incident report
///
/// Public endpoint (no authentication required). Accepts the structured
/// form fields plus an optional evidence asset id obtained from a prior
/// upload, and persists a single report document into the content store.
#[utoipa::path(
    post,
    path = "/api/incidents",
    request_body = SubmitIncidentDto,
    responses(
        (status = 200, description = "Report submitted", body = ApiResponse<CreatedDocument>),
        (status = 400, description = "Validation error"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Content store write failed")
    ),
    tag = "incidents"
)]
pub async fn submit_incident(
    State(service): State<Arc<IncidentService>>,
    AppJson(dto): AppJson<SubmitIncidentDto>,
) -> Result<Json<ApiResponse<CreatedDocument>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(collect_validation_errors(&e)))?;

    let created = service.submit(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(created),
        Some("Report submitted!".to_string()),
    )))
}

/// Fallback for non-POST methods on the submission path.
/// Fails before any store interaction.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "message": "Method Not Allowed" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::incidents::routes;
    use crate::modules::content_store::InMemoryContentStore;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn setup() -> (Arc<InMemoryContentStore>, TestServer) {
        let store = Arc::new(InMemoryContentStore::new());
        let service = Arc::new(IncidentService::new(store.clone()));
        let server = TestServer::new(routes::routes(service)).unwrap();
        (store, server)
    }

    fn valid_payload() -> Value {
        json!({
            "fullName": "A. User",
            "emailAddress": "a@x.com",
            "attackType": "Phishing",
            "description": "test"
        })
    }

    #[tokio::test]
    async fn test_submit_without_file_returns_200_and_new_status() {
        let (store, server) = setup();

        let response = server.post("/api/incidents").json(&valid_payload()).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Report submitted!");
        assert!(body["data"]["id"].as_str().is_some());

        let docs = store.documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["status"], "new");
        assert!(docs[0].get("evidenceFile").is_none());
    }

    #[tokio::test]
    async fn test_submit_with_asset_id_embeds_reference() {
        let (store, server) = setup();

        let mut payload = valid_payload();
        payload["evidenceFileAssetId"] = json!("asset-123");

        let response = server.post("/api/incidents").json(&payload).await;
        response.assert_status_ok();

        let docs = store.documents();
        assert_eq!(docs[0]["evidenceFile"]["asset"]["_ref"], "asset-123");
    }

    #[tokio::test]
    async fn test_client_supplied_timestamp_is_ignored() {
        let (store, server) = setup();

        let mut payload = valid_payload();
        payload["submittedAt"] = json!("1999-01-01T00:00:00Z");

        let response = server.post("/api/incidents").json(&payload).await;
        response.assert_status_ok();

        let submitted_at = store.documents()[0]["submittedAt"].as_str().unwrap().to_string();
        assert_ne!(submitted_at, "1999-01-01T00:00:00Z");
        let parsed: chrono::DateTime<chrono::Utc> = submitted_at.parse().unwrap();
        assert!(chrono::Utc::now() - parsed < chrono::Duration::minutes(1));
    }

    #[tokio::test]
    async fn test_get_returns_405_and_no_store_interaction() {
        let (store, server) = setup();

        let response = server.get("/api/incidents").await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = response.json();
        assert_eq!(body["message"], "Method Not Allowed");
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_required_field_returns_400() {
        let (store, server) = setup();

        let response = server
            .post("/api/incidents")
            .json(&json!({ "fullName": "A. User" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_email_returns_field_level_error() {
        let (store, server) = setup();

        let mut payload = valid_payload();
        payload["emailAddress"] = json!("not-an-email");

        let response = server.post("/api/incidents").json(&payload).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        let errors = body["errors"].as_array().unwrap();
        assert!(errors
            .iter()
            .any(|e| e.as_str().unwrap().contains("email_address")));
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_with_generic_message() {
        let (store, server) = setup();
        store.set_fail_creates(true);

        let response = server.post("/api/incidents").json(&valid_payload()).await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        let message = body["message"].as_str().unwrap();
        // generic only; the simulated outage detail must not leak
        assert!(!message.contains("simulated"));
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_resubmission_creates_distinct_documents() {
        let (store, server) = setup();

        let first: Value = server.post("/api/incidents").json(&valid_payload()).await.json();
        let second: Value = server.post("/api/incidents").json(&valid_payload()).await.json();

        assert_ne!(first["data"]["id"], second["data"]["id"]);
        assert_eq!(store.document_count(), 2);
    }
}
