//! lingo-server service entry point.

use anyhow::Result;
use lingo_common::config::Config;
use lingo_common::logging::init_logging;
use lingo_common::Validate;
use lingo_server::{build_router, AnalysisOrchestrator, AppState};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> Result<()> {
    let startup_start = std::time::Instant::now();

    let config = Config::load_with_env()?;
    config.validate().map_err(lingo_common::Error::from)?;

    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Lingo Server v{}", env!("CARGO_PKG_VERSION"));
    for warning in &config.override_warnings {
        tracing::warn!("{}", warning);
    }

    let orchestrator = AnalysisOrchestrator::from_config(&config.model)
        .map_err(|e| lingo_common::Error::External(e.to_string()))?;
    match orchestrator.model_name() {
        Some(model) => tracing::info!(model = %model, "Model analysis enabled"),
        None => tracing::warn!("No API key configured, serving offline analysis only"),
    }

    // Browser clients call from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(AppState::new(orchestrator)).layer(cors);

    let addr = config.listen_address();

    let startup_duration = startup_start.elapsed();
    tracing::info!(
        duration_ms = startup_duration.as_millis() as u64,
        "Service initialized in {:?}",
        startup_duration
    );

    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
