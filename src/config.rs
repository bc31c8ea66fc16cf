use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::leads::files::{ACCEPTED_EXTENSIONS, MAX_UPLOAD_BYTES};

/// Default spreadsheet export with the materials list
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1v79ZawzWLyeDgQF6Y1VZsNIM1pP1OXvUi4pvLT5ATRI/export?format=csv&gid=624696833";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub leads: LeadsConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// CSV export URL; empty disables the feed
    #[serde(default = "default_sheet_url")]
    pub sheet_url: String,
    /// Fetch timeout; none by default
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sheet_url: default_sheet_url(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_min_volume")]
    pub min_volume_cm3: f64,
    #[serde(default = "default_max_volume")]
    pub max_volume_cm3: f64,
    #[serde(default = "default_volume")]
    pub default_volume_cm3: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_volume_cm3: default_min_volume(),
            max_volume_cm3: default_max_volume(),
            default_volume_cm3: default_volume(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadsConfig {
    /// CRM lead endpoint, absolute or relative to `base_url`
    #[serde(default = "default_lead_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Minimum time the upload form must be open before submit
    #[serde(default = "default_min_fill_ms")]
    pub min_fill_ms: u64,
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_lead_endpoint(),
            base_url: None,
            timeout_seconds: None,
            min_fill_ms: default_min_fill_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactsConfig {
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default = "default_policy_url")]
    pub policy_url: String,
    /// Named image assets (`seg-design`, `service-light`, `material-0`, ...)
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
    #[serde(default)]
    pub contacts: ContactsConfig,
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            logo_url: None,
            favicon_url: None,
            policy_url: default_policy_url(),
            assets: BTreeMap::new(),
            contacts: ContactsConfig::default(),
            accepted_extensions: default_accepted_extensions(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_metrics_endpoint")]
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_metrics_endpoint(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_sheet_url() -> String {
    DEFAULT_SHEET_URL.to_string()
}

fn default_min_volume() -> f64 {
    10.0
}

fn default_max_volume() -> f64 {
    2000.0
}

fn default_volume() -> f64 {
    250.0
}

fn default_lead_endpoint() -> String {
    "/api/amo/lead".to_string()
}

fn default_min_fill_ms() -> u64 {
    2000
}

fn default_title() -> String {
    "3D ZIPPER — Фабрика деталей".to_string()
}

fn default_policy_url() -> String {
    "/policy".to_string()
}

fn default_accepted_extensions() -> Vec<String> {
    ACCEPTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_max_upload_bytes() -> u64 {
    MAX_UPLOAD_BYTES
}

fn default_true() -> bool {
    true
}

fn default_metrics_endpoint() -> String {
    "/metrics".to_string()
}

/// Load configuration from an optional TOML file plus `ZIPPER__*` env vars
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("ZIPPER").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("server.host '{}' is not a valid IP address", cfg.server.host);
    }

    let calc = &cfg.calculator;
    if !(calc.min_volume_cm3 > 0.0) {
        anyhow::bail!("calculator.min_volume_cm3 must be positive");
    }
    if calc.min_volume_cm3 >= calc.max_volume_cm3 {
        anyhow::bail!(
            "calculator.min_volume_cm3 ({}) must be below max_volume_cm3 ({})",
            calc.min_volume_cm3,
            calc.max_volume_cm3
        );
    }
    if calc.default_volume_cm3 < calc.min_volume_cm3 || calc.default_volume_cm3 > calc.max_volume_cm3 {
        anyhow::bail!(
            "calculator.default_volume_cm3 ({}) must lie within [{}, {}]",
            calc.default_volume_cm3,
            calc.min_volume_cm3,
            calc.max_volume_cm3
        );
    }

    if cfg.leads.endpoint.trim().is_empty() {
        anyhow::bail!("leads.endpoint cannot be empty");
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("metrics.endpoint must start with '/'");
    }

    Ok(())
}
