//! # pos-core server
//!
//! Starts the [`PosSystem`], optionally loads the demo café, and serves the JSON API
//! until Ctrl-C or SIGTERM.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! PORT=8080 LOG_FORMAT=json cargo run
//! ```

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use pos_core::api::{self, AppState};
use pos_core::config::Config;
use pos_core::lifecycle::{seed_demo_data, PosSystem};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    setup_tracing(config.log_format);

    info!(?config, "Starting POS server");
    let system = PosSystem::start(&config);

    if config.seed_demo_data {
        seed_demo_data(
            &system.catalog_client,
            &system.table_client,
            &system.employee_client,
        )
        .await?;
    }

    let addr = config.bind_addr().context("invalid HOST/PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Listening");

    let app = api::router(AppState::from_system(&system));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    system.shutdown().await.context("actor shutdown")?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
