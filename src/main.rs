//! hackathon-admin server entry point.
//!
//! Wires configuration, the record store, and the HTTP router, then serves
//! until interrupted.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hackathon_admin::api;
use hackathon_admin::app_state::{AdminCredentials, AppState};
use hackathon_admin::config::{AdminConfig, LogFormat};
use hackathon_admin::domain::SessionStore;
use hackathon_admin::service::ApplicationService;
use hackathon_admin::stats::StatsOptions;
use hackathon_admin::store::{ApplicationStore, PostgresApplicationStore};

/// How often expired admin sessions are swept.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config =
        AdminConfig::from_env().map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting hackathon-admin");

    // Build record store
    let store = if config.persistence_enabled {
        let pg = PostgresApplicationStore::connect(&config)
            .await
            .context("connecting to PostgreSQL")?;
        pg.migrate().await.context("running migrations")?;
        ApplicationStore::Postgres(pg)
    } else {
        tracing::warn!("persistence disabled, applications are kept in memory only");
        ApplicationStore::in_memory()
    };

    // Build service layer
    let stats_options = StatsOptions {
        word_limit: config.word_frequency_limit,
    };
    let application_service = Arc::new(ApplicationService::new(Arc::new(store), stats_options));

    if let Some(path) = &config.seed_csv_path {
        application_service
            .seed_from_file(path)
            .await
            .with_context(|| format!("seeding from {}", path.display()))?;
    }

    // Build application state
    let sessions = Arc::new(SessionStore::new(config.session_ttl_secs));
    let app_state = AppState {
        application_service,
        sessions: Arc::clone(&sessions),
        credentials: Arc::new(AdminCredentials::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
        )),
    };

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "expired sessions removed");
            }
        }
    });

    // Build router
    let app = api::build_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.request_timeout_secs),
            )),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
