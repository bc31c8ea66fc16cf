/// Integration tests for loading the material catalog from the spreadsheet feed
mod common;

use common::{setup_sheet_mock, SHEET_CSV, SHEET_PATH};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use zipper_site::{
    catalog::{loader::build_feed_client, CatalogSource, MaterialCatalog},
    pricing::{estimate_for, PricingBranch, QualityTier},
};

fn catalog_for(server: &MockServer) -> MaterialCatalog {
    let client = build_feed_client(None).unwrap();
    MaterialCatalog::new(client, format!("{}{}", server.uri(), SHEET_PATH))
}

#[tokio::test]
async fn test_feed_materials_are_normalized() {
    let server = setup_sheet_mock(200, SHEET_CSV).await;
    let catalog = catalog_for(&server);

    let snapshot = catalog.refresh().await;

    assert_eq!(snapshot.source, CatalogSource::Feed);
    let names: Vec<&str> = snapshot.materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Bambu PETG", "Esun PA-CF", "Formlabs Tough Resin"]);

    // First occurrence wins over the later duplicate
    let petg = snapshot.find("Bambu PETG").unwrap();
    assert_eq!(petg.tag, "визуал, декор");
    assert_eq!(petg.multiplier, 1.0);

    // Missing multiplier is guessed from the name
    assert_eq!(snapshot.find("Esun PA-CF").unwrap().multiplier, 2.1);
    assert_eq!(snapshot.find("Formlabs Tough Resin").unwrap().multiplier, 1.8);
}

#[tokio::test]
async fn test_feed_error_uses_fallback() {
    let server = setup_sheet_mock(500, "boom").await;
    let catalog = catalog_for(&server);

    let snapshot = catalog.refresh().await;

    assert_eq!(snapshot.source, CatalogSource::Fallback);
    assert_eq!(snapshot.materials.len(), 5);
}

#[tokio::test]
async fn test_header_only_feed_uses_fallback() {
    let server = setup_sheet_mock(200, "Бренд,Материал,Коэф\n").await;
    let catalog = catalog_for(&server);

    let snapshot = catalog.refresh().await;

    assert_eq!(snapshot.source, CatalogSource::Fallback);
    assert_eq!(snapshot.materials[0].name, "PETG");
}

#[tokio::test]
async fn test_failed_refresh_replaces_previous_feed_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SHEET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SHEET_CSV, "text/csv"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SHEET_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);

    assert_eq!(catalog.refresh().await.source, CatalogSource::Feed);
    assert_eq!(catalog.snapshot().materials.len(), 3);

    assert_eq!(catalog.refresh().await.source, CatalogSource::Fallback);
    assert_eq!(catalog.snapshot().materials.len(), 5);
}

#[tokio::test]
async fn test_feed_snapshot_drives_pricing() {
    let server = setup_sheet_mock(200, SHEET_CSV).await;
    let catalog = catalog_for(&server);
    let snapshot = catalog.refresh().await;

    let resin = estimate_for(&snapshot, "Formlabs Tough Resin", 100.0, QualityTier::Std);
    assert_eq!(resin.branch, PricingBranch::Resin);
    assert_eq!(resin.price, 7150);

    let nylon = estimate_for(&snapshot, "Esun PA-CF", 100.0, QualityTier::Draft);
    assert_eq!(nylon.branch, PricingBranch::Volume);
    assert_eq!(nylon.price, 5513);
}
