//! Site configuration as served to the landing page.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{CalculatorConfig, Config, SiteConfig};
use crate::leads::bytes_to_nice;
use crate::pricing::QualityTier;

/// Company phone the default messenger links point at
pub const COMPANY_PHONE: &str = "79260048138";

/// Prefilled WhatsApp message
pub const WHATSAPP_GREETING: &str = "Здравствуйте, хочу рассчитать печать";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contacts {
    pub whatsapp: String,
    pub telegram: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadLimits {
    pub accepted_extensions: Vec<String>,
    pub max_upload_bytes: u64,
    pub max_upload_nice: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculatorLimits {
    pub min_volume_cm3: f64,
    pub max_volume_cm3: f64,
    pub default_volume_cm3: f64,
    pub qualities: Vec<QualityTier>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteInfo {
    pub title: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub policy_url: String,
    pub assets: BTreeMap<String, String>,
    pub contacts: Contacts,
    pub upload: UploadLimits,
    pub calculator: CalculatorLimits,
    pub version: &'static str,
}

/// Escapes that `encodeURIComponent` leaves as literal characters
const URI_COMPONENT_UNESCAPES: &[(&str, &str)] = &[
    ("+", "%20"),
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%7E", "~"),
];

/// `encodeURIComponent`-style encoding: spaces become `%20`, and `!'()~*`
/// stay literal
fn encode_component(text: &str) -> String {
    let form_encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    URI_COMPONENT_UNESCAPES
        .iter()
        .fold(form_encoded, |acc, (from, to)| acc.replace(from, to))
}

pub fn default_whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        COMPANY_PHONE,
        encode_component(WHATSAPP_GREETING)
    )
}

pub fn default_telegram_link() -> String {
    format!("https://t.me/+{}", COMPANY_PHONE)
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Configured messenger links, blank values replaced by the defaults
pub fn resolve_contacts(site: &SiteConfig) -> Contacts {
    Contacts {
        whatsapp: non_blank(site.contacts.whatsapp.as_ref()).unwrap_or_else(default_whatsapp_link),
        telegram: non_blank(site.contacts.telegram.as_ref()).unwrap_or_else(default_telegram_link),
    }
}

/// Favicon, falling back to the logo
pub fn resolve_favicon(site: &SiteConfig) -> Option<String> {
    non_blank(site.favicon_url.as_ref()).or_else(|| non_blank(site.logo_url.as_ref()))
}

fn calculator_limits(calc: &CalculatorConfig) -> CalculatorLimits {
    CalculatorLimits {
        min_volume_cm3: calc.min_volume_cm3,
        max_volume_cm3: calc.max_volume_cm3,
        default_volume_cm3: calc.default_volume_cm3,
        qualities: vec![QualityTier::Draft, QualityTier::Std, QualityTier::Hd],
    }
}

impl SiteInfo {
    pub fn from_config(config: &Config) -> Self {
        let site = &config.site;
        Self {
            title: site.title.clone(),
            logo_url: non_blank(site.logo_url.as_ref()),
            favicon_url: resolve_favicon(site),
            policy_url: site.policy_url.clone(),
            assets: site.assets.clone(),
            contacts: resolve_contacts(site),
            upload: UploadLimits {
                accepted_extensions: site.accepted_extensions.clone(),
                max_upload_bytes: site.max_upload_bytes,
                max_upload_nice: bytes_to_nice(site.max_upload_bytes),
            },
            calculator: calculator_limits(&config.calculator),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
