use anyhow::Result;
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{Method, Response},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use crate::{
    catalog::{loader::build_feed_client, MaterialCatalog},
    config::Config,
    error::AppError,
    handlers::{self, AppState},
    leads::{resolve_endpoint, LeadSubmitter},
    metrics,
    signals::setup_signal_handlers,
};

/// Start the landing-site backend
///
/// This function:
/// 1. Initializes metrics
/// 2. Loads the material catalog
/// 3. Sets up signal handlers for graceful shutdown and catalog refresh
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let state = build_state(Arc::new(config.clone()))?;

    info!("Loading material catalog...");
    let snapshot = state.catalog.refresh().await;
    info!(
        source = snapshot.source.as_str(),
        materials = snapshot.materials.len(),
        "Material catalog ready"
    );

    let (shutdown_tx, signal_handle) = setup_signal_handlers(state.catalog.clone());
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting 3D ZIPPER site backend on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Wire the catalog and lead submitter from configuration.
///
/// An unresolvable lead endpoint is not fatal: leads are still accepted and
/// every forward attempt is logged as failed.
pub fn build_state(config: Arc<Config>) -> Result<AppState> {
    let feed_timeout = config.catalog.timeout_seconds.map(Duration::from_secs);
    let feed_client = build_feed_client(feed_timeout)?;
    let catalog = Arc::new(MaterialCatalog::new(
        feed_client,
        config.catalog.sheet_url.clone(),
    ));

    let endpoint = match resolve_endpoint(config.leads.base_url.as_deref(), &config.leads.endpoint) {
        Ok(url) => {
            info!("Leads will be forwarded to {}", url);
            Some(url)
        }
        Err(e) => {
            warn!("Lead forwarding disabled: {}", e);
            None
        }
    };
    let lead_timeout = config.leads.timeout_seconds.map(Duration::from_secs);
    let submitter = LeadSubmitter::new(endpoint, lead_timeout)?;

    Ok(AppState {
        config,
        catalog,
        submitter,
    })
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState, metrics_handle: Option<Arc<PrometheusHandle>>) -> Router {
    let metrics_endpoint = state.config.metrics.endpoint.clone();

    let api_routes = Router::new()
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/site", get(handlers::site::site_info))
        .route("/api/materials", get(handlers::materials::list_materials))
        .route("/api/estimate", post(handlers::estimate::estimate))
        .route("/api/phone/format", get(handlers::phone::format))
        .route("/api/leads/calc", post(handlers::leads::submit_calc))
        .route("/api/leads/upload", post(handlers::leads::submit_upload))
        .with_state(state);

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if let Some(handle) = metrics_handle {
        app = app.merge(
            Router::new()
                .route(&metrics_endpoint, get(handlers::metrics_handler::metrics))
                .with_state(handle),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    app
        // Lead bodies carry file references only, never file content
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Turn a handler panic into a generic 500 JSON error
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "Request handler panicked");

    AppError::InternalError("Unexpected failure while handling the request".to_string())
        .into_response()
}
