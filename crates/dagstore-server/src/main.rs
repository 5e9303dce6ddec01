//! Binary entrypoint for the dagstore HTTP server.
//!
//! Configuration comes from `DAGSTORE_*` environment variables; see
//! [`ServerConfig`].

use dagstore_server::config::ServerConfig;
use dagstore_server::router::build_router;
use dagstore_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = build_router(state.clone());

    let addr = config.bind_addr();
    tracing::info!(backend = %config.backend, "dagstore server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match state.into_service() {
        Some(service) => service.close()?,
        None => tracing::warn!("service still shared at shutdown; store not closed"),
    }
    tracing::info!("dagstore server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
