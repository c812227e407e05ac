//! SwiftKes server: serves the server-rendered wallet app and its WASM bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! All wallet behavior runs in the browser after hydration. The server only
//! renders the initial HTML, serves `/pkg` assets and answers health checks;
//! it holds no shared mutable state.

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, DEFAULT_LOG_FILTER, ServerConfig};
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is the normal production case.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "swiftkes server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let leptos = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;

    let app = routes::app(leptos.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "swiftkes listening");
    axum::serve(listener, app).await?;
    Ok(())
}
