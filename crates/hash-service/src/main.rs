//! SHA-256 checksum service
//!
//! Serves `GET /hash?data=...&expected=...`, returning the checksum of
//! `data` and, when `expected` is given, whether it matches. Every other
//! path redirects to `/hash`.

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hash_service::{checksum, router, Config, HASH_PATH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hash_service=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    // Refuse to start with a broken hash primitive
    checksum::self_check()?;

    let app = router::app();
    let addr = config.socket_addr()?;

    tracing::info!("Listening on http://{}{}", addr, HASH_PATH);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hash-service stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM, whichever arrives first.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Cannot listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Cannot listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    };

    tracing::info!("Received {}, draining in-flight requests", received);
}
