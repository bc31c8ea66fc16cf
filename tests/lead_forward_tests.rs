/// Integration tests for forwarding leads to the CRM endpoint
mod common;

use std::collections::BTreeMap;

use common::{setup_crm_mock, wait_for_requests, LEAD_PATH};
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};
use zipper_site::{
    error::AppError,
    leads::{resolve_endpoint, Contact, LeadFile, LeadPayload, LeadSubmitter},
    pricing::QualityTier,
};

fn submitter_for(server: &MockServer) -> LeadSubmitter {
    let endpoint = resolve_endpoint(Some(&server.uri()), LEAD_PATH).unwrap();
    LeadSubmitter::new(Some(endpoint), None).unwrap()
}

fn file_payload() -> LeadPayload {
    let mut utm = BTreeMap::new();
    utm.insert("utm_source".to_string(), "yandex".to_string());
    utm.insert("referrer".to_string(), String::new());

    LeadPayload::file(
        "AZ-202510-4242".to_string(),
        true,
        Contact {
            name: "Анна".to_string(),
            phone: "+7 (916) 123-45-67".to_string(),
        },
        vec![LeadFile {
            name: "housing.step".to_string(),
            size: 1_572_864,
        }],
        utm,
    )
}

#[tokio::test]
async fn test_file_lead_is_posted_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LEAD_PATH))
        .and(body_partial_json(json!({
            "lead_id": "AZ-202510-4242",
            "type": "file",
            "consent": true,
            "contact": { "name": "Анна", "phone": "+7 (916) 123-45-67" },
            "files": [{ "name": "housing.step", "size": 1572864 }],
            "utm": { "utm_source": "yandex", "referrer": "" },
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = submitter_for(&server);
    submitter.try_submit(&file_payload()).await.unwrap();
}

#[tokio::test]
async fn test_calc_lead_omits_contact_fields() {
    let server = setup_crm_mock(200).await;
    let submitter = submitter_for(&server);

    let payload = LeadPayload::calc(
        "AZ-202510-1001".to_string(),
        "PETG".to_string(),
        QualityTier::Hd,
        120.0,
        5670,
        BTreeMap::new(),
    );
    submitter.spawn_submit(payload).await.unwrap();

    let received = wait_for_requests(&server, 1).await;
    assert_eq!(received.len(), 1);

    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["type"], "calc");
    assert_eq!(body["quality"], "hd");
    assert_eq!(body["price_est"], 5670);
    assert!(body.get("contact").is_none());
    assert!(body.get("files").is_none());
    assert!(body.get("consent").is_none());
}

#[tokio::test]
async fn test_crm_error_is_reported_but_not_retried() {
    let server = setup_crm_mock(500).await;
    let submitter = submitter_for(&server);

    let err = submitter.try_submit(&file_payload()).await.unwrap_err();
    match err {
        AppError::UpstreamError { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("Expected upstream error, got {:?}", other),
    }

    // Swallowed, exactly one more attempt
    submitter.submit(file_payload()).await;
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
}
