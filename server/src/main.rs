//! SSR host for the Google sign-in client.
//!
//! Renders the Leptos pages, serves the WASM bundle and static assets, and
//! carries the backend URL from the environment into every rendered page.

mod config;
mod routes;

use std::net::SocketAddr;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // Loaded before the subscriber so `.env` may set `RUST_LOG`.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    match config::DotenvStatus::from_result(dotenv) {
        config::DotenvStatus::Loaded(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        config::DotenvStatus::Missing => {}
        config::DotenvStatus::Unreadable(error) => tracing::warn!(%error, "ignoring unreadable .env"),
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "oauth host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let host = config::HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;

    let mut addr = leptos_options.site_addr;
    if let Some(port) = host.port {
        addr.set_port(port);
    }

    tracing::info!(backend_url = host.client.backend_url(), site_root = %leptos_options.site_root, "host configured");

    let app = routes::app(routes::AppState { leptos_options, client: host.client });
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "oauth host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
