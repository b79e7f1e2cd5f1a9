//! api_exporter
//!
//! - Scrape endpoint: /metrics?target=<url>
//! - Credentials loaded once from YAML, injected per target
//! - Graceful shutdown on Ctrl+C / SIGTERM

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_exporter_core::error::{ExporterError, Result};
use api_exporter_server::{
    app_state::AppState,
    cli::{self, Cli},
    config,
    credentials::CredentialStore,
    router,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "api_exporter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let cfg = config::load_from_file(&args.api_config)?;
    let credentials = CredentialStore::from_config(&cfg)?;
    let listen = cli::parse_listen_address(&args.listen_address)?;
    let settings = args.probe_settings();

    tracing::info!(
        config = %args.api_config.display(),
        credentials = credentials.len(),
        "api config loaded"
    );
    match settings.timeout {
        Some(t) => tracing::info!(timeout_ms = t.as_millis() as u64, "probe timeout set"),
        None => tracing::warn!("no probe timeout configured; a hung target holds its scrape open"),
    }

    let state = AppState::new(credentials, &settings)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ExporterError::Internal(format!("failed to bind {listen}: {e}")))?;
    tracing::info!(%listen, "api_exporter listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
