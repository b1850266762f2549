//! TempPad HTTP Server
//!
//! Main entry point for the dashboard server.

use std::{sync::Arc, time::Duration};

use application::DashboardService;
use infrastructure::{AppConfig, SheetsAdapter, TemplateEngine};
use integration_sheets::GoogleSheetsClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "temppad_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🌤️ TempPad v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    if config.sheets.spreadsheet_id.is_empty() {
        anyhow::bail!("No spreadsheet configured (set sheets.spreadsheet_id)");
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        spreadsheet = %config.sheets.spreadsheet_id,
        range = %config.dashboard.range,
        "Configuration loaded"
    );

    // Load the service-account key and build the Sheets client
    let key = config
        .credentials
        .load_key()
        .map_err(|e| anyhow::anyhow!("Failed to load service-account key: {e}"))?;
    let client = GoogleSheetsClient::new(config.sheets.clone(), key)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Sheets client: {e}"))?;

    // Wire the dashboard service
    let adapter = SheetsAdapter::with_range(Arc::new(client), &config.dashboard.range);
    let dashboard = DashboardService::new(Arc::new(adapter));

    let templates =
        TemplateEngine::new().map_err(|e| anyhow::anyhow!("Failed to compile templates: {e}"))?;

    let state = AppState {
        dashboard: Arc::new(dashboard),
        templates,
        title: config.dashboard.title.clone(),
    };

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
