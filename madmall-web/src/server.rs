/// HTTP server: spawns axum on a background tokio task.
use axum::Router;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::api::api_router;
use crate::state::AppState;

/// A running server. Dropping the handle without calling
/// [`shutdown`](Self::shutdown) also stops it.
pub struct ServerHandle {
    pub port: u16,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.task.await {
            log::error!("HTTP server task failed: {}", e);
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_router().layer(cors).with_state(state)
}

pub async fn spawn_server(
    mut state: AppState,
    bind_address: &str,
    port: u16,
) -> Result<ServerHandle, std::io::Error> {
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_address, port)).await?;
    let actual_port = listener.local_addr()?.port();
    state.port = actual_port;

    log::info!(
        "HTTP server listening on http://{}:{}",
        bind_address,
        actual_port
    );

    let app = build_router(state);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(async move {
        let shutdown = async move {
            let _ = shutdown_rx.changed().await;
        };
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
        {
            log::error!("HTTP server exited with error: {}", e);
        }
    });

    Ok(ServerHandle {
        port: actual_port,
        shutdown_tx,
        task,
    })
}
