//! MADMall web server: env validation, config loading, content store, HTTP server.
pub mod api;
pub mod client;
pub mod config;
pub mod logging;
pub mod server;
pub mod state;

use madmall_core::env::{EnvError, IntegrationKeys, ProcessEnv};
use madmall_core::storage::resolve_content_root;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("{0}")]
    Env(#[from] EnvError),

    #[error("Failed to bind HTTP server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the server and block until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logger: {}", e);
    }

    // Fail fast on malformed integration keys, before anything binds.
    let keys = IntegrationKeys::from_env(&ProcessEnv)?;
    let configured = keys.configured();
    if configured.is_empty() {
        log::info!(target: "madmall.env", "No integrations configured");
    } else {
        log::info!(target: "madmall.env", "Integrations configured: {}", configured.join(", "));
    }
    for (name, _) in keys.client_vars() {
        log::debug!(target: "madmall.env", "Client variable {} is set", name);
    }

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    let content_root = resolve_content_root(&config.content_roots);
    log::info!(target: "madmall.storage", "Content root: {}", content_root.display());
    if !content_root.is_dir() {
        log::warn!(
            target: "madmall.storage",
            "Content root {} does not exist; every document will 404",
            content_root.display()
        );
    }

    let state = AppState::new(content_root, config.manifest_path.clone());
    let handle = server::spawn_server(state, &config.bind_address, config.port).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    log::info!("Shutting down");
    handle.shutdown().await;
    Ok(())
}
