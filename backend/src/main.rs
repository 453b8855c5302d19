use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use capture_backend::config::AppConfig;
use capture_backend::handlers::analytics::prune_limiters;
use capture_backend::{build_router, AppState};

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,capture_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let port = config.port;
    tracing::info!(
        environment = %config.environment,
        static_dir = %config.static_dir.display(),
        ga4 = config.ga4.is_some(),
        "Loaded configuration"
    );
    if config.ga4.is_none() {
        tracing::info!("GA4 credentials not set, analytics events are only logged");
    }

    let state = Arc::new(AppState::new(config));

    let state_for_pruning = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            prune_limiters(&state_for_pruning);
        }
    });

    let app = build_router(state);

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
