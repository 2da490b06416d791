mod api;
mod inference;
mod middleware;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};
use crate::inference::InferenceClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = styleguru_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if config.hf_api_key.is_none() {
        tracing::warn!("HUGGING_FACE_API_KEY not set; chat requests will get the apology reply");
    }

    let inference = InferenceClient::new(
        config.hf_api_key.clone(),
        config.hf_model.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?;
    let app = build_app(AppState {
        inference,
        stream_delay: Duration::from_millis(config.stream_delay_ms),
    });

    let listener = tokio::net::TcpListener::bind(config.relay_bind_addr).await?;
    tracing::info!(addr = %config.relay_bind_addr, model = %config.hf_model, "chat relay listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
