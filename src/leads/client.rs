use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;
use crate::leads::models::LeadPayload;
use crate::logging::SensitivePhone;
use crate::metrics;

/// Forwards leads to the CRM endpoint, once, without retries.
///
/// Without a resolvable endpoint every submission fails (and is logged).
#[derive(Clone)]
pub struct LeadSubmitter {
    client: reqwest::Client,
    endpoint: Option<String>,
}

/// Resolve a possibly relative endpoint path against a base URL
pub fn resolve_endpoint(base_url: Option<&str>, endpoint: &str) -> Result<String, AppError> {
    if let Ok(url) = Url::parse(endpoint) {
        return Ok(url.to_string());
    }
    let base = base_url.ok_or_else(|| {
        AppError::ConfigError(format!(
            "Lead endpoint '{}' is relative but no leads.base_url is set",
            endpoint
        ))
    })?;
    let base = Url::parse(base)
        .map_err(|e| AppError::ConfigError(format!("Invalid leads.base_url '{}': {}", base, e)))?;
    base.join(endpoint)
        .map(|url| url.to_string())
        .map_err(|e| AppError::ConfigError(format!("Invalid lead endpoint '{}': {}", endpoint, e)))
}

impl LeadSubmitter {
    pub fn new(endpoint: Option<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// POST the lead; errors are returned to the caller
    pub async fn try_submit(&self, payload: &LeadPayload) -> Result<(), AppError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| AppError::ConfigError("No lead endpoint configured".to_string()))?;
        let response = self.client.post(endpoint).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamError {
                status: response.status(),
                message: "Lead endpoint rejected the lead".to_string(),
            });
        }
        Ok(())
    }

    /// POST the lead and swallow any failure after logging it
    pub async fn submit(&self, payload: LeadPayload) {
        let phone = payload
            .contact
            .as_ref()
            .map(|c| SensitivePhone::new(&c.phone).to_string())
            .unwrap_or_default();

        match self.try_submit(&payload).await {
            Ok(()) => {
                debug!(
                    lead_id = %payload.lead_id,
                    lead_type = payload.lead_type.as_str(),
                    phone = %phone,
                    "Lead forwarded"
                );
                metrics::record_lead_forward("success");
            }
            Err(e) => {
                warn!(
                    lead_id = %payload.lead_id,
                    lead_type = payload.lead_type.as_str(),
                    error = %e,
                    "amo submit error"
                );
                metrics::record_lead_forward("failure");
            }
        }
    }

    /// Fire-and-forget: the caller never waits for the CRM
    pub fn spawn_submit(&self, payload: LeadPayload) -> tokio::task::JoinHandle<()> {
        let submitter = self.clone();
        tokio::spawn(async move { submitter.submit(payload).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_endpoint() {
        let url = resolve_endpoint(None, "https://crm.example.com/api/amo/lead").unwrap();
        assert_eq!(url, "https://crm.example.com/api/amo/lead");
    }

    #[test]
    fn test_resolve_relative_endpoint() {
        let url = resolve_endpoint(Some("http://127.0.0.1:3000"), "/api/amo/lead").unwrap();
        assert_eq!(url, "http://127.0.0.1:3000/api/amo/lead");
    }

    #[test]
    fn test_relative_endpoint_without_base_is_config_error() {
        let err = resolve_endpoint(None, "/api/amo/lead").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_submit_swallows_connection_errors() {
        let submitter = LeadSubmitter::new(Some("http://127.0.0.1:1/lead".to_string()), None).unwrap();
        let payload = sample_payload();
        assert!(submitter.try_submit(&payload).await.is_err());
        submitter.submit(payload).await;
    }

    #[tokio::test]
    async fn test_missing_endpoint_fails_softly() {
        let submitter = LeadSubmitter::new(None, None).unwrap();
        let err = submitter.try_submit(&sample_payload()).await.unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        submitter.spawn_submit(sample_payload()).await.unwrap();
    }

    fn sample_payload() -> LeadPayload {
        LeadPayload::calc(
            "AZ-202501-1000".to_string(),
            "PETG".to_string(),
            crate::pricing::QualityTier::Std,
            10.0,
            350,
            Default::default(),
        )
    }
}
