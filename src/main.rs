use std::sync::Arc;

use anyhow::Context;
use clinic_web::config::Config;
use clinic_web::state::AppState;
use clinic_web::table::RouteTable;
use clinic_web::view::{FileViewRenderer, PlaceholderRenderer, ViewRenderer};
use clinic_web::{app, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_web=debug,tower_http=info".into()),
        )
        .init();

    tracing::info!("clinic-web starting");

    let config = Config::from_env()?;
    config.log_startup();

    let routes = RouteTable::new(routes::declarations()).context("invalid route declaration")?;
    tracing::info!("Loaded {} page routes", routes.len());

    let renderer: Arc<dyn ViewRenderer> = match &config.views_dir {
        Some(dir) => {
            let files = FileViewRenderer::load(dir, routes.views())
                .with_context(|| format!("failed to load views from {}", dir.display()))?;
            tracing::info!("Loaded {} views from {}", files.len(), dir.display());
            Arc::new(files)
        }
        None => Arc::new(PlaceholderRenderer),
    };

    let state = AppState {
        routes: Arc::new(routes),
        renderer,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("clinic-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
