use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "zipper_catalog_refresh_total",
        "Material catalog refreshes by source (feed or fallback)"
    );
    describe_gauge!(
        "zipper_catalog_materials",
        "Number of materials in the current catalog snapshot"
    );
    describe_counter!("zipper_estimates_total", "Price estimates by formula branch");
    describe_counter!("zipper_leads_total", "Lead submissions by type and outcome");
    describe_counter!(
        "zipper_lead_forward_total",
        "Leads forwarded to the CRM endpoint by outcome"
    );
    describe_gauge!("zipper_site_info", "Service version information");

    gauge!("zipper_site_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a catalog refresh
pub fn record_catalog_refresh(source: &str, materials: usize) {
    counter!("zipper_catalog_refresh_total", "source" => source.to_string()).increment(1);
    gauge!("zipper_catalog_materials").set(materials as f64);
}

/// Record a price estimate
pub fn record_estimate(branch: &str) {
    counter!("zipper_estimates_total", "branch" => branch.to_string()).increment(1);
}

/// Record a lead accepted or rejected by the form checks
pub fn record_lead(lead_type: &str, outcome: &str) {
    counter!(
        "zipper_leads_total",
        "type" => lead_type.to_string(),
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

/// Record the result of forwarding a lead
pub fn record_lead_forward(outcome: &str) {
    counter!("zipper_lead_forward_total", "outcome" => outcome.to_string()).increment(1);
}
