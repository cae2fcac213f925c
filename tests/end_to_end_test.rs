// End-to-end submission tests: a real `SubmissionClient` talking over HTTP
// to the real ingestion router, with both sides sharing one in-memory
// content store.

use std::sync::Arc;

use axum_test::{TestServer, TestServerConfig, Transport};

use cybersecure_core::features::incidents::clients::{
    EvidenceFile, IncidentForm, SubmissionClient, SubmissionError,
};
use cybersecure_core::features::incidents::models::AttackType;
use cybersecure_core::features::incidents::{routes, IncidentService};
use cybersecure_core::modules::content_store::InMemoryContentStore;

fn setup() -> (Arc<InMemoryContentStore>, TestServer, SubmissionClient) {
    let store = Arc::new(InMemoryContentStore::new());
    let service = Arc::new(IncidentService::new(store.clone()));
    let app = routes::routes(service);

    let config = TestServerConfig {
        transport: Some(Transport::HttpRandomPort),
        ..TestServerConfig::default()
    };
    let server = TestServer::new_with_config(app, config).unwrap();

    let endpoint = server
        .server_address()
        .expect("http transport server has an address")
        .join("api/incidents")
        .unwrap();
    let client = SubmissionClient::new(endpoint, store.clone());

    (store, server, client)
}

fn form(evidence: Option<EvidenceFile>) -> IncidentForm {
    IncidentForm {
        full_name: "A. User".to_string(),
        email_address: "a@x.com".to_string(),
        attack_type: AttackType::DataBreach,
        description: "laptop stolen with customer records".to_string(),
        evidence,
    }
}

fn evidence() -> EvidenceFile {
    EvidenceFile {
        file_name: "ransom-note.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        data: b"%PDF-1.4 fake".to_vec(),
    }
}

#[tokio::test]
async fn test_full_submission_with_evidence() {
    let (store, _server, client) = setup();

    let receipt = client.submit(form(Some(evidence()))).await.unwrap();
    assert!(!receipt.document_id.is_empty());

    let assets = store.assets();
    assert_eq!(assets.len(), 1);

    let docs = store.documents();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["status"], "new");
    assert_eq!(docs[0]["attackType"], "Data Breach");
    assert_eq!(
        docs[0]["evidenceFile"]["asset"]["_ref"],
        assets[0].id.as_str()
    );
}

#[tokio::test]
async fn test_full_submission_without_evidence() {
    let (store, _server, client) = setup();

    let receipt = client.submit(form(None)).await.unwrap();
    assert!(!receipt.document_id.is_empty());
    assert_eq!(store.asset_count(), 0);
    assert!(store.documents()[0].get("evidenceFile").is_none());
}

#[tokio::test]
async fn test_create_failure_after_upload_orphans_the_asset() {
    let (store, _server, client) = setup();
    store.set_fail_creates(true);

    let result = client.submit(form(Some(evidence()))).await;
    assert!(matches!(result, Err(SubmissionError::Rejected(_))));

    // No document was created, but the uploaded asset persists: the known
    // inconsistency window of the non-transactional two-phase write.
    assert_eq!(store.document_count(), 0);
    assert_eq!(store.asset_count(), 1);
}

#[tokio::test]
async fn test_endpoint_validation_rejects_bad_submission() {
    let (store, _server, client) = setup();

    let mut bad = form(None);
    bad.email_address = "not-an-email".to_string();

    let result = client.submit(bad).await;
    assert!(matches!(result, Err(SubmissionError::Rejected(_))));
    assert_eq!(store.document_count(), 0);
}
