mod conf;
mod error;
mod handler;

pub use conf::{Config, ParseEnvError};
pub use error::GatewayError;
pub use handler::{
    FormatParams, PLACEHOLDERS_PATH, PlaceholdersResponse, SharedExtractor,
    build_router, is_absent_or_empty,
};

use crater_numbering::BraceExtractor;
use crater_observability::{TracingConfig, setup_tracing};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub async fn start_server(
    config: Config,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let tracing_config = TracingConfig::new("crater-gateway", &log_level, false)
        .with_log_format(config.log_format.as_deref());
    setup_tracing(tracing_config)?;

    let router = build_router(Arc::new(BraceExtractor)).layer(
        axum::extract::DefaultBodyLimit::max(config.max_payload_bytes),
    );
    let listener =
        TcpListener::bind(format!("0.0.0.0:{}", config.http_port)).await?;
    info!("start server on port {:?}", config.http_port);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        )
        .expect("failed to install signal handler")
        .recv()
        .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
