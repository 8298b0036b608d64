use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use desa_core::config::LayeredConfig;
use desa_core::geo::GeometryStore;
use desa_store::memory::MemoryVillageStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use desa_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "desa_api=info,desa_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();
    let config = LayeredConfig::load(api_config.config_file.as_deref())
        .context("Failed to load configuration")?;

    tracing::info!(
        port = api_config.port,
        boundaries = %config.boundaries_path.value.display(),
        villages = %config.villages_path.value.display(),
        fuzzy_threshold_deg = config.fuzzy_threshold_deg.value,
        "Starting Desa API server"
    );

    // Boundaries are required; the server cannot resolve anything without them
    let (geometry_store, report) =
        GeometryStore::from_path(&config.boundaries_path.value, config.boundary_properties())
            .context("Failed to load village boundaries")?;
    if !report.skipped.is_empty() {
        tracing::warn!(skipped = report.skipped.len(), "Some boundary features were skipped");
    }

    let villages_path = &config.villages_path.value;
    let village_store = if villages_path.exists() {
        MemoryVillageStore::load_from_path(villages_path)
            .context("Failed to load village records")?
    } else {
        tracing::warn!(
            path = %villages_path.display(),
            "Village records not found, starting with an empty record store"
        );
        MemoryVillageStore::new()
    };

    let resolver_options = config
        .resolver_options()
        .context("Invalid resolver configuration")?;

    let state = Arc::new(AppState::new(
        Arc::new(geometry_store),
        resolver_options,
        Arc::new(village_store),
        Duration::from_secs(api_config.macro_cache_secs),
    ));

    let cors_origin = api_config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", api_config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", api_config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
