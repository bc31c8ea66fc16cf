#![allow(dead_code)]

use std::time::Duration;

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Sheet export with a duplicate row, a decimal comma and a missing multiplier
pub const SHEET_CSV: &str = "Бренд,Серия,Материал,Технология,Назначение,Коэф\r\n\
Bambu,,PETG,FFF,\"визуал, декор\",\"1,0\"\r\n\
Esun,,PA-CF,FFF,прочность,\r\n\
Formlabs,Tough,Resin,SLA,смола,\"1,8\"\r\n\
,,,,,\r\n\
Bambu,,PETG,FFF,дубль,3\r\n";

pub const SHEET_PATH: &str = "/sheet.csv";
pub const LEAD_PATH: &str = "/api/amo/lead";

/// Spreadsheet mock answering with `status` and `body`
pub async fn setup_sheet_mock(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SHEET_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_string(), "text/csv"))
        .mount(&mock_server)
        .await;

    mock_server
}

/// CRM mock accepting every lead with `status`
pub async fn setup_crm_mock(status: u16) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LEAD_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Wait for fire-and-forget submissions to reach the mock
pub async fn wait_for_requests(server: &MockServer, expected: usize) -> Vec<Request> {
    for _ in 0..50 {
        let received = server.received_requests().await.unwrap_or_default();
        if received.len() >= expected {
            return received;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    server.received_requests().await.unwrap_or_default()
}
