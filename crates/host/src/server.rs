//! Server loop.

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::HostConfig;

/// Bind `config.bind_addr` and serve `app` until Ctrl-C.
pub async fn serve(config: &HostConfig, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        service = %config.service_name,
        environment = %config.environment,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!(service = %config.service_name, "shut down");
    Ok(())
}

/// Process entry point shared by the service binaries: logging, config,
/// pipeline, server.
pub async fn run<F>(service_name: &str, build: F) -> anyhow::Result<()>
where
    F: FnOnce(&HostConfig) -> Router,
{
    innoclinic_observability::init();

    let config = HostConfig::from_env(service_name).context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let app = build(&config);
    serve(&config, app).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
