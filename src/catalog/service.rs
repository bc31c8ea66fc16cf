use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{info, warn};

use crate::catalog::loader::fetch_rows;
use crate::catalog::models::{fallback_materials, CatalogSnapshot, CatalogSource};
use crate::catalog::normalizer::normalize_materials;
use crate::metrics;

/// Read-only material catalog backed by the spreadsheet feed.
///
/// Readers always see a complete snapshot; `refresh` swaps in a new one.
pub struct MaterialCatalog {
    client: reqwest::Client,
    sheet_url: String,
    snapshot: ArcSwap<CatalogSnapshot>,
}

impl MaterialCatalog {
    /// Create a catalog that starts out with the fallback list
    pub fn new(client: reqwest::Client, sheet_url: impl Into<String>) -> Self {
        Self {
            client,
            sheet_url: sheet_url.into(),
            snapshot: ArcSwap::from_pointee(CatalogSnapshot::fallback()),
        }
    }

    /// Create a catalog with a fixed snapshot and no feed
    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            client: reqwest::Client::new(),
            sheet_url: String::new(),
            snapshot: ArcSwap::from_pointee(snapshot),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.load_full()
    }

    /// Re-fetch the sheet and publish a new snapshot.
    ///
    /// Never fails: feed errors and empty feeds publish the fallback list.
    pub async fn refresh(&self) -> Arc<CatalogSnapshot> {
        let snapshot = match fetch_rows(&self.client, &self.sheet_url).await {
            Ok(rows) => {
                let materials = normalize_materials(&rows);
                if materials.is_empty() {
                    warn!("Materials sheet yielded no usable rows, using fallback list");
                    CatalogSnapshot::new(fallback_materials(), CatalogSource::Fallback)
                } else {
                    CatalogSnapshot::new(materials, CatalogSource::Feed)
                }
            }
            Err(e) => {
                warn!(error = %e, "CSV materials error, using fallback list");
                CatalogSnapshot::new(fallback_materials(), CatalogSource::Fallback)
            }
        };

        info!(
            source = snapshot.source.as_str(),
            "Loaded {} materials into catalog",
            snapshot.materials.len()
        );
        metrics::record_catalog_refresh(snapshot.source.as_str(), snapshot.materials.len());

        let snapshot = Arc::new(snapshot);
        self.snapshot.store(snapshot.clone());
        snapshot
    }
}
