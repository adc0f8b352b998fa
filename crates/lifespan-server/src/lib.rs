//! HTTP service for the life expectancy estimator.
//!
//! # Routes
//!
//! | Method | Path           | Purpose                                  |
//! |--------|----------------|------------------------------------------|
//! | GET    | `/`            | greeting                                 |
//! | GET    | `/health`      | liveness, plain `ok`                     |
//! | GET    | `/api/hello`   | greeting                                 |
//! | POST   | `/api/predict` | estimate from a `PredictionRequest` body |
//! | GET    | `/test`        | persistence diagnostics                  |
//!
//! Handlers are stateless apart from the read-only [`AppState`].

pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
mod extract;
mod routes;
pub mod state;

use tokio::net::TcpListener;
use tracing::info;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ServerConfig;
pub use diagnostics::{DatabaseEnv, DiagnosticReport, PersistenceProbe, ProbeError};
pub use error::{ApiError, Result, ServerError};
pub use routes::router;
pub use state::AppState;

/// Bind `config` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be bound and
/// [`ServerError::Serve`] if the server loop fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(
        addr = %addr,
        persistence_probe = state.probe.is_some(),
        "listening"
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
