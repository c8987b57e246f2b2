//! Lumen demo server.
//!
//! - `/`        : greeting, counted as home/success
//! - `/random`  : 50/50 success or simulated 500
//! - `/metrics` : Prometheus exposition
//! - background sampler for `app_active_users`

use std::process::ExitCode;

use lumen_core::error::{LumenError, Result};
use lumen_server::{app_state::AppState, config, obs, router};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "server exited with error");
            eprintln!("lumen-server: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    obs::logging::init(&cfg.log)?;

    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    let sampler = state
        .active_users_sampler()
        .spawn(state.cfg().sampler.interval());
    let app = router::build_router(state);

    tracing::info!(%listen, "Server starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| LumenError::Internal(format!("server failed: {e}")));

    sampler.stop().await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
